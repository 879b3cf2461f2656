use std::fmt::{Display, Error, Formatter};

use qrcode::types::QrError;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum RenderError {
    /// The symbol provider cannot represent the content at error correction
    /// level H.
    Encoding(QrError),
    /// The requested side and padding leave less than one pixel per module.
    CellTooSmall { side: u32, padding: u32, modules: u32 },
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match *self {
            Self::Encoding(e) => write!(f, "content cannot be encoded: {e}"),
            Self::CellTooSmall { side, padding, modules } => {
                write!(f, "side {side} with padding {padding} leaves no room for {modules} modules")
            }
        }
    }
}

impl std::error::Error for RenderError {}

impl From<QrError> for RenderError {
    fn from(e: QrError) -> Self {
        Self::Encoding(e)
    }
}

pub type RenderResult<T> = Result<T, RenderError>;
