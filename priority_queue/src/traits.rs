pub trait NegativeInfinity {
    fn negative_infinity() -> Self;
}
