use nutype::nutype;

/// Email address as entered at sign-in: trimmed, lowercased, and required to
/// be non-empty and contain `@`. Anything stricter is the simulated identity
/// provider's problem, not ours.
#[nutype(
    sanitize(trim, lowercase),
    validate(not_empty, predicate = |s| s.contains('@')),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Email(String);
