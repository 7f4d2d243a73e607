use serde::Serialize;

/// One opcode: the digit value it is keyed by and its padded mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OpDesc {
    pub value: u8,
    pub mnemonic: &'static str,
}

pub const TABLE: &[OpDesc] = &[
    OpDesc { value: 0x0, mnemonic: "STOP" },
    OpDesc { value: 0x1, mnemonic: "LOAD" },
    OpDesc { value: 0x2, mnemonic: "STOR" },
    OpDesc { value: 0x3, mnemonic: "ADD " },
    OpDesc { value: 0x4, mnemonic: "SUB " },
    OpDesc { value: 0x5, mnemonic: "MULT" },
    OpDesc { value: 0x6, mnemonic: "DIV " },
    OpDesc { value: 0x7, mnemonic: "AND " },
    OpDesc { value: 0x8, mnemonic: "OR  " },
    OpDesc { value: 0x9, mnemonic: "XOR " },
    OpDesc { value: 0xA, mnemonic: "SHFT" },
    OpDesc { value: 0xB, mnemonic: "JUMP" },
    OpDesc { value: 0xC, mnemonic: "JNEG" },
    OpDesc { value: 0xD, mnemonic: "CLER" },
    OpDesc { value: 0xE, mnemonic: "JZER" },
    OpDesc { value: 0xF, mnemonic: "CALL" },
];

/// Digit value to opcode lookup. Values without an entry are not opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeTable {
    slots: [Option<OpDesc>; 16],
}

impl OpcodeTable {
    pub const STANDARD: OpcodeTable = OpcodeTable::from_descs(TABLE);

    /// Later entries for the same value replace earlier ones; values above 15 are skipped.
    pub const fn from_descs(descs: &[OpDesc]) -> Self {
        let mut slots = [None; 16];
        let mut i = 0;
        while i < descs.len() {
            let d = descs[i];
            if d.value < 16 {
                slots[d.value as usize] = Some(d);
            }
            i += 1;
        }
        Self { slots }
    }

    pub fn lookup(&self, value: u8) -> Option<OpDesc> {
        self.slots.get(value as usize).copied().flatten()
    }

    pub fn iter(&self) -> impl Iterator<Item = OpDesc> + '_ {
        self.slots.iter().flatten().copied()
    }
}

impl Default for OpcodeTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_is_full_and_padded() {
        let t = OpcodeTable::STANDARD;
        assert_eq!(t.iter().count(), 16);
        for v in 0..16u8 {
            let d = t.lookup(v).unwrap();
            assert_eq!(d.value, v);
            assert_eq!(d.mnemonic.len(), 4, "{:?}", d.mnemonic);
        }
        assert_eq!(t.lookup(16), None);
    }

    #[test]
    fn partial_table() {
        const SMALL: &[OpDesc] = &[
            OpDesc { value: 0xB, mnemonic: "JUMP" },
            OpDesc { value: 0xD, mnemonic: "CALL" },
        ];
        let t = OpcodeTable::from_descs(SMALL);
        assert_eq!(t.lookup(0xD).map(|d| d.mnemonic), Some("CALL"));
        assert_eq!(t.lookup(0x0), None);
        assert_eq!(t.iter().count(), 2);
    }
}
