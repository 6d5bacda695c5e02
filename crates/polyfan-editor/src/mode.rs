use std::fmt;

/// Active keyboard transform.
///
/// A single value rather than one flag per transform, so at most one
/// transform can be active at a time.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TransformMode {
    #[default]
    None,
    Translate,
    Rotate,
    Scale,
}

impl fmt::Display for TransformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransformMode::None => "none",
            TransformMode::Translate => "translate",
            TransformMode::Rotate => "rotate",
            TransformMode::Scale => "scale",
        };
        f.write_str(name)
    }
}
