//! Composite text generators for names, monikers and company names.
//!
//! Every generated string has single-quote characters removed so it can be
//! embedded in a query literal even where parameters are not available.

use rand::seq::SliceRandom;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Beatrix", "Carlos", "Dana", "Elif", "Farah", "Grace", "Hiro", "Ines",
    "Jamal", "Kiri", "Liam", "Mei", "Nadia", "Oskar", "Priya", "Quinn", "Rosa", "Sven",
    "Tariq", "Uma", "Viktor", "Wen", "Xena", "Yusuf", "Zoe", "D'Arcy", "Ren'ee",
];

const LAST_NAMES: &[&str] = &[
    "Abara", "Bianchi", "Chen", "Dubois", "Eriksen", "Fischer", "Garcia", "Haddad", "Ivanova",
    "Jensen", "Kowalski", "Lindqvist", "Moreau", "Nakamura", "O'Brien", "Petrov", "Quispe",
    "Rossi", "Schmidt", "Tanaka", "Ueda", "Varga", "Weber", "Xu", "Yilmaz", "Zapata",
    "D'Angelo", "O'Hara",
];

const AUTHORS: &[&str] = &[
    "Jane Austen", "Chinua Achebe", "Jorge Luis Borges", "Italo Calvino", "Fyodor Dostoevsky",
    "George Eliot", "Gabriel Garcia Marquez", "Ursula K. Le Guin", "Herman Melville",
    "Toni Morrison", "Flannery O'Connor", "Sylvia Plath", "Arundhati Roy", "Mary Shelley",
    "Leo Tolstoy", "Kurt Vonnegut", "Virginia Woolf", "Haruki Murakami", "Sean O'Casey",
];

const COLORS: &[&str] = &[
    "azure", "black", "blue", "coral", "cyan", "fuchsia", "gold", "green", "indigo", "ivory",
    "lavender", "lime", "magenta", "maroon", "mint", "navy", "olive", "orange", "orchid",
    "pink", "plum", "purple", "red", "salmon", "silver", "tan", "teal", "violet", "white",
    "yellow",
];

const COMPANY_SUFFIXES: &[&str] = &[
    "Inc", "LLC", "Group", "and Sons", "Ltd", "Holdings", "Partners", "Labs", "Industries",
];

const COMPANY_CONNECTORS: &[&str] = &["-", " and ", ", "];

/// Remove every single-quote character from `s`.
pub fn strip_quotes(s: &str) -> String {
    s.replace('\'', "")
}

fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    // Pools are non-empty constants.
    pool.choose(rng).copied().unwrap_or_default()
}

/// Generate a person name: first name, an author's name and a last name.
pub fn generate_name<R: Rng>(rng: &mut R) -> String {
    let first = pick(rng, FIRST_NAMES);
    let author = pick(rng, AUTHORS);
    let last = pick(rng, LAST_NAMES);
    strip_quotes(&format!("{first} {author} {last}"))
}

/// Generate a username in the style `first.last`, `firstlast` or `first.last42`.
pub fn generate_username<R: Rng>(rng: &mut R) -> String {
    let first = pick(rng, FIRST_NAMES).to_lowercase();
    let last = pick(rng, LAST_NAMES).to_lowercase();
    let username = match rng.gen_range(0..3) {
        0 => format!("{first}.{last}"),
        1 => format!("{first}{last}"),
        _ => format!("{first}.{last}{}", rng.gen_range(1..100)),
    };
    strip_quotes(&username)
}

/// Generate an alias moniker: a color immediately followed by a username.
pub fn generate_moniker<R: Rng>(rng: &mut R) -> String {
    let color = pick(rng, COLORS);
    let username = generate_username(rng);
    strip_quotes(&format!("{color}{username}"))
}

/// Generate a company name such as `Rossi, Chen and Weber` or `Tanaka Labs`.
pub fn generate_company<R: Rng>(rng: &mut R) -> String {
    let company = match rng.gen_range(0..3) {
        0 => format!("{} {}", pick(rng, LAST_NAMES), pick(rng, COMPANY_SUFFIXES)),
        1 => format!(
            "{}{}{}",
            pick(rng, LAST_NAMES),
            pick(rng, COMPANY_CONNECTORS),
            pick(rng, LAST_NAMES)
        ),
        _ => format!(
            "{}, {} and {}",
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES)
        ),
    };
    strip_quotes(&company)
}
