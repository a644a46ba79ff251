//! The built-in word catalog and grid normalization.
//!
//! Word records carry the vocabulary entry (German form, translation,
//! grammatical article, category) plus a stable id for progress tracking.
//! A remote catalog can supply the same shape; this module ships the
//! offline seed set.

use rand::seq::SliceRandom;
use rand::Rng;

/// A vocabulary entry. The engine itself only consumes the normalized form
/// of [`Word::german`]; the remaining fields are for display and progress
/// bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Word {
    /// Stable identifier, used as the key in the progress store.
    pub id: &'static str,

    /// The German form of the word.
    pub german: &'static str,

    /// The English translation.
    pub english: &'static str,

    /// The grammatical article (Der, Die, Das).
    pub article: &'static str,

    /// The category the word is grouped under.
    pub category: &'static str,
}

const fn word(
    id: &'static str,
    german: &'static str,
    english: &'static str,
    article: &'static str,
    category: &'static str,
) -> Word {
    Word {
        id,
        german,
        english,
        article,
        category,
    }
}

/// The built-in vocabulary, grouped by category.
pub const ALL_WORDS: &[Word] = &[
    // Animals
    word("ani_1", "HUND", "Dog", "Der", "Animals"),
    word("ani_2", "KATZE", "Cat", "Die", "Animals"),
    word("ani_3", "MAUS", "Mouse", "Die", "Animals"),
    word("ani_4", "VOGEL", "Bird", "Der", "Animals"),
    word("ani_5", "PFERD", "Horse", "Das", "Animals"),
    word("ani_6", "KUH", "Cow", "Die", "Animals"),
    word("ani_7", "SCHWEIN", "Pig", "Das", "Animals"),
    word("ani_8", "FISCH", "Fish", "Der", "Animals"),
    // Food
    word("food_1", "BROT", "Bread", "Das", "Food"),
    word("food_2", "WASSER", "Water", "Das", "Food"),
    word("food_3", "APFEL", "Apple", "Der", "Food"),
    word("food_4", "MILCH", "Milk", "Die", "Food"),
    word("food_5", "KAFFEE", "Coffee", "Der", "Food"),
    word("food_6", "KUCHEN", "Cake", "Der", "Food"),
    // Home
    word("home_1", "HAUS", "House", "Das", "Home"),
    word("home_2", "TISCH", "Table", "Der", "Home"),
    word("home_3", "STUHL", "Chair", "Der", "Home"),
    word("home_4", "BETT", "Bed", "Das", "Home"),
    word("home_5", "LAMPE", "Lamp", "Die", "Home"),
    word("home_6", "FENSTER", "Window", "Das", "Home"),
    word("home_7", "TUR", "Door", "Die", "Home"),
    // Nature
    word("nat_1", "BAUM", "Tree", "Der", "Nature"),
    word("nat_2", "BLUME", "Flower", "Die", "Nature"),
    word("nat_3", "WALD", "Forest", "Der", "Nature"),
    word("nat_4", "MEER", "Sea", "Das", "Nature"),
    word("nat_5", "BERG", "Mountain", "Der", "Nature"),
    word("nat_6", "SONNE", "Sun", "Die", "Nature"),
    // Family
    word("fam_1", "MUTTER", "Mother", "Die", "Family"),
    word("fam_2", "VATER", "Father", "Der", "Family"),
    word("fam_3", "KIND", "Child", "Das", "Family"),
    word("fam_4", "BRUDER", "Brother", "Der", "Family"),
    word("fam_5", "SCHWESTER", "Sister", "Die", "Family"),
    // School
    word("sch_1", "BUCH", "Book", "Das", "School"),
    word("sch_2", "STIFT", "Pen", "Der", "School"),
    word("sch_3", "LEHRER", "Teacher", "Der", "School"),
    word("sch_4", "HEFT", "Notebook", "Das", "School"),
    word("sch_5", "TAFEL", "Board", "Die", "School"),
    // Body
    word("body_1", "KOPF", "Head", "Der", "Body"),
    word("body_2", "HAND", "Hand", "Die", "Body"),
    word("body_3", "FUSS", "Foot", "Der", "Body"),
    word("body_4", "AUGE", "Eye", "Das", "Body"),
    word("body_5", "MUND", "Mouth", "Der", "Body"),
];

/// Draws `count` distinct words from the built-in catalog, uniformly at
/// random. Returns fewer words when `count` exceeds the catalog size.
pub fn random_set(count: usize, rng: &mut impl Rng) -> Vec<&'static Word> {
    ALL_WORDS.choose_multiple(rng, count).collect()
}

/// Normalizes a word for grid placement: uppercase, with the fixed folding
/// table ß→SS, Ä→A, Ö→O, Ü→U.
///
/// Generation assumes its input is already normalized; this is the step
/// that has to run on any word before it is hidden in or matched against a
/// grid.
pub fn simplify_for_grid(word: &str) -> String {
    word.to_uppercase()
        .replace('Ä', "A")
        .replace('Ö', "O")
        .replace('Ü', "U")
}
