/// Fixed width character unit. The zero value is reserved for the
/// terminator and never counts as content.
pub trait Unit: Copy + Default + PartialEq + Ord {

    const NUL: Self;

    #[inline(always)]
    fn is_nul(self) -> bool {
        self == Self::NUL
    }
}

impl Unit for u8 {
    const NUL: Self = 0;
}

impl Unit for u16 {
    const NUL: Self = 0;
}

impl Unit for u32 {
    const NUL: Self = 0;
}
