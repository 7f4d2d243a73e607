pub mod block;
pub mod decoder;
pub mod digits;
pub mod disasm;
pub mod error;
pub mod opcodes;
pub mod render;
pub mod source;
pub mod word;

pub use block::{DecodedBlock, Footer, Header};
pub use decoder::{LhexDecoder, Word};
pub use digits::Alphabet;
pub use disasm::format_block;
pub use error::{AlphabetError, DecodeError};
pub use opcodes::{OpDesc, OpcodeTable};
