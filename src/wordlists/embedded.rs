//! Embedded word lists
//!
//! The three difficulty corpora, compiled into the binary. The words (and
//! their spellings) are fixed: accents are stripped so every entry is plain
//! ASCII the player can actually type.

/// Easy tier words (5 letters each)
pub const EASY: &[&str] = &[
    "balai", "cable", "ecole", "objet", "musee", "image", "frere", "droit", "japon", "texte",
    "scene", "homme", "grand", "album", "ligne", "paris", "temps", "armee", "livre", "cadre",
];

/// Number of easy words
pub const EASY_COUNT: usize = 20;

/// Medium tier words (10 letters each)
pub const MEDIUM: &[&str] = &[
    "decoration",
    "brouillard",
    "criminelle",
    "entraineur",
    "instrument",
    "adolescent",
    "artificiel",
    "caricature",
    "guitariste",
    "microscope",
    "navigateur",
    "ordinateur",
    "philosophe",
    "presidente",
    "revolution",
    "spectateur",
    "vegetation",
    "trampoline",
    "simulateur",
    "restaurant",
];

/// Number of medium words
pub const MEDIUM_COUNT: usize = 20;

/// Hard tier words (13-15 letters)
pub const HARD: &[&str] = &[
    "geocalisation",
    "circonscription",
    "experimentation",
    "quotidiennement",
    "affaiblissement",
    "hospitalisation",
    "mathematicienne",
    "confidentialite",
    "instrumentation",
    "sensibilisation",
    "concessionaire",
    "horizentalement",
    "impressioniste",
    "remarquablement",
    "progressivement",
    "personellement",
    "agroalimentaire",
    "acrobatiquement",
    "perpendiculaire",
    "electrification",
];

/// Number of hard words
pub const HARD_COUNT: usize = 20;
