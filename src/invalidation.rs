use bitflags::bitflags;

bitflags! {
    /// Flags telling the host what the card changed since it last looked
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ChangeFlags: u8 {
        /// Card frame moved (bottom offset changed); re-run layout
        const NEEDS_LAYOUT = 0b01;
        /// Visual appearance changed (corner radius, overlay, title)
        const NEEDS_PAINT  = 0b10;
    }
}
