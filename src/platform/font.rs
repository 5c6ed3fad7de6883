//! DPI-scaled GDI font ownership
//!
//! A [`ScaledFont`] owns one `HFONT` and deletes it when dropped. The
//! window swaps in a new one whenever its DPI changes, after every control
//! has been pointed at the replacement.

use windows::core::PCWSTR;
use windows::Win32::Graphics::Gdi::{
    CreateFontW, DeleteObject, CLEARTYPE_QUALITY, CLIP_DEFAULT_PRECIS, DEFAULT_CHARSET,
    DEFAULT_PITCH, FF_DONTCARE, FW_NORMAL, HFONT, HGDIOBJ, OUT_DEFAULT_PRECIS,
};

use crate::platform::windows::to_wstring;

#[derive(Debug, thiserror::Error)]
#[error("Failed to create font {face:?} with height {height}")]
pub struct FontError {
    pub face: String,
    pub height: i32,
}

#[derive(Debug)]
pub struct ScaledFont {
    handle: HFONT,
    height: i32,
}

impl ScaledFont {
    /// Creates a regular-weight ClearType font
    ///
    /// `height` follows GDI rules: negative values select by character height.
    pub fn create(face: &str, height: i32) -> Result<Self, FontError> {
        let face_name = to_wstring(face);
        let handle = unsafe {
            CreateFontW(
                height,
                0,
                0,
                0,
                FW_NORMAL.0 as i32,
                0,
                0,
                0,
                DEFAULT_CHARSET.0 as u32,
                OUT_DEFAULT_PRECIS.0 as u32,
                CLIP_DEFAULT_PRECIS.0 as u32,
                CLEARTYPE_QUALITY.0 as u32,
                (DEFAULT_PITCH.0 | FF_DONTCARE.0) as u32,
                PCWSTR(face_name.as_ptr()),
            )
        };

        if handle.0 == 0 {
            return Err(FontError {
                face: face.to_string(),
                height,
            });
        }

        Ok(Self { handle, height })
    }

    pub fn handle(&self) -> HFONT {
        self.handle
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

impl Drop for ScaledFont {
    fn drop(&mut self) {
        unsafe {
            let _ = DeleteObject(HGDIOBJ(self.handle.0));
        }
    }
}
