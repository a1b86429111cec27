//! Turning filter options into predicates.

use fsv::{FilteredStringView, Predicate, compose};

use crate::cli::{CharClass, FilterArgs};

impl CharClass {
    pub fn matches(self, c: u8) -> bool {
        match self {
            CharClass::Alpha => c.is_ascii_alphabetic(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Alnum => c.is_ascii_alphanumeric(),
            CharClass::Space => c.is_ascii_whitespace(),
            CharClass::Upper => c.is_ascii_uppercase(),
            CharClass::Lower => c.is_ascii_lowercase(),
            CharClass::Punct => c.is_ascii_punctuation(),
            CharClass::Graphic => c.is_ascii_graphic(),
        }
    }
}

/// One predicate per option, in the order keep, drop, class.
pub fn build_predicates<'a>(args: &FilterArgs) -> Vec<Predicate<'a>> {
    let keep = args.keep.iter().map(|chars| {
        let set = chars.as_bytes().to_vec();
        Predicate::new(move |c: &u8| set.contains(c))
    });
    let drop = args.drop.iter().map(|chars| {
        let set = chars.as_bytes().to_vec();
        Predicate::new(move |c: &u8| !set.contains(c))
    });
    let class = args
        .class
        .iter()
        .map(|&class| Predicate::new(move |c: &u8| class.matches(*c)));

    keep.chain(drop).chain(class).collect()
}

/// A view over `data` that shows what `args` lets through.
pub fn apply<'a>(data: &'a [u8], args: &FilterArgs) -> FilteredStringView<'a> {
    let predicates = build_predicates(args);
    tracing::debug!(
        raw_len = data.len(),
        conditions = predicates.len(),
        "applying filter"
    );
    compose(&FilteredStringView::new(data), predicates)
}
