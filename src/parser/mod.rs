mod entry;
mod quantity;
pub mod units;


pub use entry::IngredientEntry;
pub use quantity::{Quantity, leading_quantity};

use tracing::trace;

/// Words dropped from the front of the ingredient name ("1 cup of flour")
const FILLER_WORDS: &[&str] = &["of"];

/// Parse a free-text ingredient line into count, unit and name.
///
/// Never fails: a line that yields no name after the quantity and unit are
/// taken off is returned whole as the ingredient with no count or unit.
///
/// # Example
/// ```
/// use forkify::parse_line;
///
/// let entry = parse_line("1 1/2 cups chopped fresh basil");
/// assert_eq!(entry.count, Some(1.5));
/// assert_eq!(entry.unit, "cup");
/// assert_eq!(entry.ingredient, "chopped fresh basil");
/// ```
pub fn parse_line(raw: &str) -> IngredientEntry {
    let cleaned = strip_parentheticals(raw).replace('\u{2044}', "/");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    let mut rest = tokens.as_slice();

    let count = leading_quantity(rest).map(|quantity| {
        rest = &rest[quantity.consumed..];
        quantity.value
    });

    let unit = match rest.first().and_then(|token| units::lookup(token)) {
        Some(canonical) => {
            rest = &rest[1..];
            canonical
        }
        None => "",
    };

    while let Some(first) = rest.first() {
        if !FILLER_WORDS.contains(&first.to_lowercase().as_str()) {
            break;
        }
        rest = &rest[1..];
    }

    let ingredient = rest.join(" ");
    if ingredient.is_empty() {
        trace!(raw, "ingredient line has no name, keeping it unparsed");
        return IngredientEntry::unparsed(raw.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    IngredientEntry::new(count, unit, ingredient)
}

/// Remove `( ... )` clauses, nested ones included. An unclosed `(` drops the
/// rest of the line; a stray `)` is dropped on its own.
fn strip_parentheticals(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut depth = 0usize;

    for c in raw.chars() {
        match c {
            '(' => {
                depth += 1;
                // keep words on either side of the clause apart
                out.push(' ');
            }
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }

    out
}
