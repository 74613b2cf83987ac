#![forbid(unsafe_code)]

//! Static decode tables.

use casement_core::Key;

/// The escape byte that introduces a multi-byte sequence.
pub const ESCAPE: u8 = 0x1B;

/// Ordered escape-sequence table: complete byte sequence to portable code.
///
/// The escape decoder scans this table after every buffered byte; an exact
/// match wins immediately, a proper prefix keeps the decoder reading. No
/// entry is a proper prefix of another.
pub static SEQUENCES: &[(&[u8], Key)] = &[
    // CSI arrows and navigation
    (b"\x1b[A", Key::UP),
    (b"\x1b[B", Key::DOWN),
    (b"\x1b[C", Key::RIGHT),
    (b"\x1b[D", Key::LEFT),
    (b"\x1b[H", Key::HOME),
    (b"\x1b[F", Key::END),
    (b"\x1b[Z", Key::SHIFT_TAB),
    // CSI n ~ navigation band
    (b"\x1b[1~", Key::HOME),
    (b"\x1b[2~", Key::INSERT),
    (b"\x1b[3~", Key::DELETE),
    (b"\x1b[4~", Key::END),
    (b"\x1b[5~", Key::PAGE_UP),
    (b"\x1b[6~", Key::PAGE_DOWN),
    // CSI n ~ function keys
    (b"\x1b[11~", Key::function(1)),
    (b"\x1b[12~", Key::function(2)),
    (b"\x1b[13~", Key::function(3)),
    (b"\x1b[14~", Key::function(4)),
    (b"\x1b[15~", Key::function(5)),
    (b"\x1b[17~", Key::function(6)),
    (b"\x1b[18~", Key::function(7)),
    (b"\x1b[19~", Key::function(8)),
    (b"\x1b[20~", Key::function(9)),
    (b"\x1b[21~", Key::function(10)),
    (b"\x1b[23~", Key::function(11)),
    (b"\x1b[24~", Key::function(12)),
    // CSI 1;5 x Ctrl-arrows
    (b"\x1b[1;5A", Key::CTRL_UP),
    (b"\x1b[1;5B", Key::CTRL_DOWN),
    (b"\x1b[1;5C", Key::CTRL_RIGHT),
    (b"\x1b[1;5D", Key::CTRL_LEFT),
    // SS3 arrows, Home/End, F1-F4
    (b"\x1bOA", Key::UP),
    (b"\x1bOB", Key::DOWN),
    (b"\x1bOC", Key::RIGHT),
    (b"\x1bOD", Key::LEFT),
    (b"\x1bOH", Key::HOME),
    (b"\x1bOF", Key::END),
    (b"\x1bOP", Key::function(1)),
    (b"\x1bOQ", Key::function(2)),
    (b"\x1bOR", Key::function(3)),
    (b"\x1bOS", Key::function(4)),
];

/// Two-stage follow-up: escape + digit is a function key.
#[inline]
pub fn digit_function(byte: u8) -> Option<Key> {
    match byte {
        b'1'..=b'9' => Some(Key::function(byte - b'0')),
        b'0' => Some(Key::function(10)),
        _ => None,
    }
}

/// Two-stage follow-up: escape + letter is Alt+letter.
#[inline]
pub fn alt_letter(byte: u8) -> Option<Key> {
    if byte.is_ascii_alphabetic() {
        Some(Key::alt(byte as char))
    } else {
        None
    }
}

/// Mapped-backend table: reserved-band raw code (`0x100 + scan_code`, the
/// classic keyboard scan codes) to portable code.
pub static MAPPED: &[(u16, Key)] = &[
    (0x10F, Key::SHIFT_TAB),
    // Alt+letter rows (QWERTY layout order)
    (0x110, Key::alt('q')),
    (0x111, Key::alt('w')),
    (0x112, Key::alt('e')),
    (0x113, Key::alt('r')),
    (0x114, Key::alt('t')),
    (0x115, Key::alt('y')),
    (0x116, Key::alt('u')),
    (0x117, Key::alt('i')),
    (0x118, Key::alt('o')),
    (0x119, Key::alt('p')),
    (0x11E, Key::alt('a')),
    (0x11F, Key::alt('s')),
    (0x120, Key::alt('d')),
    (0x121, Key::alt('f')),
    (0x122, Key::alt('g')),
    (0x123, Key::alt('h')),
    (0x124, Key::alt('j')),
    (0x125, Key::alt('k')),
    (0x126, Key::alt('l')),
    (0x12C, Key::alt('z')),
    (0x12D, Key::alt('x')),
    (0x12E, Key::alt('c')),
    (0x12F, Key::alt('v')),
    (0x130, Key::alt('b')),
    (0x131, Key::alt('n')),
    (0x132, Key::alt('m')),
    // Function keys
    (0x13B, Key::function(1)),
    (0x13C, Key::function(2)),
    (0x13D, Key::function(3)),
    (0x13E, Key::function(4)),
    (0x13F, Key::function(5)),
    (0x140, Key::function(6)),
    (0x141, Key::function(7)),
    (0x142, Key::function(8)),
    (0x143, Key::function(9)),
    (0x144, Key::function(10)),
    (0x185, Key::function(11)),
    (0x186, Key::function(12)),
    // Navigation cluster
    (0x147, Key::HOME),
    (0x148, Key::UP),
    (0x149, Key::PAGE_UP),
    (0x14B, Key::LEFT),
    (0x14D, Key::RIGHT),
    (0x14F, Key::END),
    (0x150, Key::DOWN),
    (0x151, Key::PAGE_DOWN),
    (0x152, Key::INSERT),
    (0x153, Key::DELETE),
    // Ctrl-arrows
    (0x173, Key::CTRL_LEFT),
    (0x174, Key::CTRL_RIGHT),
    (0x18D, Key::CTRL_UP),
    (0x191, Key::CTRL_DOWN),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequences_all_start_with_escape() {
        for (seq, _) in SEQUENCES {
            assert_eq!(seq[0], ESCAPE);
            assert!(seq.len() >= 2);
        }
    }

    #[test]
    fn no_entry_is_a_prefix_of_another() {
        for (a, _) in SEQUENCES {
            for (b, _) in SEQUENCES {
                if a.len() < b.len() {
                    assert!(!b.starts_with(a), "{a:?} is a prefix of {b:?}");
                }
            }
        }
    }

    #[test]
    fn mapped_raw_codes_are_reserved_band() {
        for (raw, key) in MAPPED {
            assert!(*raw >= 0x100);
            assert!(key.is_extended());
        }
    }

    #[test]
    fn two_stage_followups() {
        assert_eq!(digit_function(b'1'), Some(Key::function(1)));
        assert_eq!(digit_function(b'0'), Some(Key::function(10)));
        assert_eq!(digit_function(b'x'), None);
        assert_eq!(alt_letter(b'a'), Some(Key::alt('a')));
        assert_eq!(alt_letter(b'Q'), Some(Key::alt('q')));
        assert_eq!(alt_letter(b'['), None);
    }
}
