// Copyright 2026 the Intake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modifier-key bitmask.

bitflags::bitflags! {
    /// Modifier keys held while an event was generated.
    ///
    /// Bit values are GLFW-compatible, so a platform layer sitting on GLFW can
    /// pass its modifier field through unchanged. Other platform layers build
    /// the mask bit by bit.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Mods: u32 {
        /// A shift key is held.
        const SHIFT = 0x0001;
        /// A control key is held.
        const CONTROL = 0x0002;
        /// An alt key is held.
        const ALT = 0x0004;
        /// A super (logo) key is held.
        const SUPER = 0x0008;
        /// Caps lock is latched.
        const CAPS_LOCK = 0x0010;
        /// Num lock is latched.
        const NUM_LOCK = 0x0020;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_by_default() {
        assert_eq!(Mods::default(), Mods::empty());
    }

    #[test]
    fn glfw_compatible_bits() {
        assert_eq!(Mods::SHIFT.bits(), 0x0001);
        assert_eq!(Mods::CONTROL.bits(), 0x0002);
        assert_eq!(Mods::ALT.bits(), 0x0004);
        assert_eq!(Mods::SUPER.bits(), 0x0008);
    }
}
