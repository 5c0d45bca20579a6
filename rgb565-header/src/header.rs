use alloc::format;
use alloc::string::String;

use crate::{INDENT, VALUES_PER_LINE};

/// Names used in the generated C header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
    /// Asset name shown in the leading comment
    pub source_name: String,
    /// Include guard macro
    pub guard: String,
    pub width_macro: String,
    pub height_macro: String,
    pub array_name: String,
}

impl HeaderLayout {
    /// Derive every macro and the array name from a common prefix
    pub fn with_prefix(prefix: &str, source_name: &str) -> Self {
        Self {
            source_name: String::from(source_name),
            guard: format!("{}_H", prefix),
            width_macro: format!("{}_WIDTH", prefix),
            height_macro: format!("{}_HEIGHT", prefix),
            array_name: format!("{}_DATA", prefix),
        }
    }

    /// Everything up to and including the opening brace of the array
    pub fn prologue(&self, width: u32, height: u32) -> String {
        format!(
            "// Generated from {source}\n\
             #ifndef {guard}\n\
             #define {guard}\n\
             \n\
             #include <stdint.h>\n\
             \n\
             #define {width_macro}  {width}\n\
             #define {height_macro} {height}\n\
             \n\
             static const uint16_t {array}[] = {{\n",
            source = self.source_name,
            guard = self.guard,
            width_macro = self.width_macro,
            height_macro = self.height_macro,
            array = self.array_name,
        )
    }

    /// Closing brace of the array and the end of the include guard
    pub fn epilogue(&self) -> String {
        format!("\n}};\n\n#endif // {}\n", self.guard)
    }
}

impl Default for HeaderLayout {
    fn default() -> Self {
        Self::with_prefix("RAPPORT_PIX_LOGO", "rapport-pix.png")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Prologue,
    Values,
    Epilogue,
    Done,
}

/// Iterator over the text of a header, one chunk at a time.
///
/// The first chunk is the prologue, followed by one chunk per line of array
/// elements and finally the epilogue. A full line ends with `\n`; the last
/// partial line does not. Concatenating all chunks yields the complete file.
pub struct HeaderChunks<'a, I> {
    layout: &'a HeaderLayout,
    width: u32,
    height: u32,
    values: I,
    stage: Stage,
}

impl<'a, I> HeaderChunks<'a, I>
where
    I: Iterator<Item = u16>,
{
    pub fn new<T>(layout: &'a HeaderLayout, width: u32, height: u32, values: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            layout,
            width,
            height,
            values: values.into_iter(),
            stage: Stage::Prologue,
        }
    }

    fn next_line(&mut self) -> Option<String> {
        let mut line = String::new();
        let mut count = 0;

        while count < VALUES_PER_LINE {
            let Some(value) = self.values.next() else {
                break;
            };
            if count == 0 {
                line.push_str(INDENT);
            }
            line.push_str(&format!("0x{:04X}, ", value));
            count += 1;
        }

        match count {
            0 => None,
            VALUES_PER_LINE => {
                line.push('\n');
                Some(line)
            }
            _ => {
                // Partial line, the pixel data is exhausted
                self.stage = Stage::Epilogue;
                Some(line)
            }
        }
    }
}

impl<'a, I> Iterator for HeaderChunks<'a, I>
where
    I: Iterator<Item = u16>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self.stage {
            Stage::Prologue => {
                self.stage = Stage::Values;
                Some(self.layout.prologue(self.width, self.height))
            }
            Stage::Values => match self.next_line() {
                Some(line) => Some(line),
                None => {
                    self.stage = Stage::Done;
                    Some(self.layout.epilogue())
                }
            },
            Stage::Epilogue => {
                self.stage = Stage::Done;
                Some(self.layout.epilogue())
            }
            Stage::Done => None,
        }
    }
}

/// Render a complete header into a single string
pub fn render_header<T>(layout: &HeaderLayout, width: u32, height: u32, values: T) -> String
where
    T: IntoIterator<Item = u16>,
{
    HeaderChunks::new(layout, width, height, values).collect()
}
