/// Type level boolean used to split inherent impls between otherwise
/// identical container instantiations.
pub trait Conditional {
    const VALUE: bool;
}

pub struct True {}

pub struct False {}

impl Conditional for True {
    const VALUE: bool = true;
}

impl Conditional for False {
    const VALUE: bool = false;
}
