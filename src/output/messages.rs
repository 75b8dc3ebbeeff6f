//! French game text
//!
//! Every player-facing string in one place, shared by the console and TUI
//! front ends.

/// Window / screen title
pub const TITLE: &str = "Jeu du pendu";

/// Opening notice shown before the first round
pub const NOTICE: &str = "Notice explicative : vous pouvez saisir n'importe quelle lettre de\n\
l'alphabet tant qu'elle ne comporte pas d'accents. Le but du jeu\n\
est de réussir à trouver le mot complet sans dépasser un nombre\n\
d'erreurs limité, en l'occurrence 7, au bout duquel le bonhomme\n\
serait malheureusement pendu. À vous de jouer !";

/// Extended notice, shown when the player answers "non" to the first prompt
pub const NOTICE_EXTENDED: &str = "Notice explicative : vous pouvez saisir n'importe quelle lettre de\n\
l'alphabet tant qu'elle ne comporte pas d'accents. Le but du jeu\n\
est de réussir à trouver le mot complet sans dépasser un nombre\n\
d'erreurs limité, en l'occurrence 7, au bout duquel le bonhomme\n\
serait malheureusement pendu. Vous gagnez 1 point lorsque vous\n\
complétez le niveau facile, 2 points pour le niveau moyen et 3\n\
points pour le niveau difficile. Aucun point n'est perdu lorsque\n\
le niveau n'est pas complété. À vous de jouer !";

/// Pacing note accompanying the extended notice
pub const EXTRA_TIME: &str = "Vous disposez de 10s de plus !";

/// Shown once the notice is acknowledged
pub const BEGIN: &str = "Commençons !";

pub const PROMPT_NOTICE: &str = "Avez-vous lu la notice (oui / non) ?";
pub const REPLY_OUI_NON: &str = "Veuillez répondre par \"oui\" ou \"non\"";

pub const DIFFICULTY_MENU_HEADER: &str = "Veuillez choisir un niveau de difficulté :";
pub const PROMPT_DIFFICULTY: &str = "Veuillez saisir : \"f\", \"m\" ou \"d\"";
pub const REPLY_F_M_D: &str = "Veuillez répondre par \"f\", \"m\" ou \"d\"";

pub const PROMPT_LETTER: &str = "Saisir lettre";
pub const PROMPT_LETTER_SINGLE: &str = "Veuillez saisir une seule lettre";
pub const PROMPT_LETTER_NEW: &str = "Veuillez saisir une nouvelle lettre";

/// Rejection: digits, accented letters, symbols
pub const REJECT_DISALLOWED: &str = "Le contenu que vous avez proposé n'est pas pris en charge.\n\
Attention aux accents, aux chiffres et aux symboles.";
/// Rejection: more than one character entered
pub const REJECT_MULTI: &str = "Vous avez saisi plus d'une lettre.";
/// Rejection: nothing entered
pub const REJECT_EMPTY: &str = "Vous n'avez saisi aucune lettre.";
/// Rejection: duplicate guess
pub const REJECT_DUPLICATE: &str = "Cette lettre a déjà été saisie.";

pub const FEEDBACK_HIT: &str = "Bien joué ! Vous avez trouvé une lettre.";
pub const FEEDBACK_MISS: &str = "Dommage, ce n'est pas la bonne lettre.";

pub const PROMPT_REPLAY: &str = "Voulez-vous rejouer (oui / non) ?";
pub const GOODBYE: &str = "Merci d'avoir joué !";
