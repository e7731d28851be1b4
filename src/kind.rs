/// Which of the two pair protocols a type satisfies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PairKind {
    Neither,
    Std,
    Alt,
    Both,
}

impl PairKind {
    pub const fn from_flags(std: bool, alt: bool) -> Self {
        match (std, alt) {
            (false, false) => PairKind::Neither,
            (true, false) => PairKind::Std,
            (false, true) => PairKind::Alt,
            (true, true) => PairKind::Both,
        }
    }

    pub const fn is_std(self) -> bool {
        matches!(self, PairKind::Std | PairKind::Both)
    }

    pub const fn is_alt(self) -> bool {
        matches!(self, PairKind::Alt | PairKind::Both)
    }
}

/// The [`PairKind`] of a type, as a constant.
///
/// ```
/// use pairlike::device::Tuple2;
/// use pairlike::{classify, PairKind};
///
/// const KIND: PairKind = classify!(Tuple2<u32, u32>);
/// assert_eq!(KIND, PairKind::Alt);
/// assert_eq!(classify!((u32, u32)), PairKind::Std);
/// assert_eq!(classify!(u32), PairKind::Neither);
/// ```
#[macro_export]
macro_rules! classify {
    ($type:ty) => {
        $crate::PairKind::from_flags(
            $crate::is_std_pair_like!($type),
            $crate::is_alt_pair_like!($type),
        )
    };
}
