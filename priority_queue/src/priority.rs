pub trait Priority: Copy + Ord {}
impl<P> Priority for P where P: Copy + Ord {}
