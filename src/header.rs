use std::io::{Result, Write};

/// Maximum accumulated token length per line, not counting the indent.
const MAX_LINE_LEN: usize = 80;

const INDENT: &str = "    ";

/// Write a complete include-guarded C header declaring `bytes` as a
/// `const uint8_t` array named `array_name`. The guard token is the
/// uppercased array name wrapped in underscores.
pub fn write_c_header<W>(
    mut writer: W,
    source_name: &str,
    array_name: &str,
    bytes: &[u8],
) -> Result<()>
where
    W: Write,
{
    let guard = format!("_{}_H_", array_name.to_uppercase());

    writeln!(writer, "// Converted from {source_name}")?;
    writeln!(writer, "#ifndef {guard}")?;
    writeln!(writer, "#define {guard}")?;
    writeln!(writer)?;
    writeln!(writer, "#include <stdint.h>")?;
    writeln!(writer)?;
    writeln!(writer, "const uint8_t {array_name}[] = {{")?;
    writeln!(writer, "{}", render_body(bytes))?;
    writeln!(writer, "}};")?;
    writeln!(writer)?;
    writeln!(writer, "#endif // {guard}")?;

    Ok(())
}

/// Render the array body: `0xNN, ` tokens wrapped so that no line's
/// token content exceeds 80 characters, with the trailing separator
/// stripped once at the end.
fn render_body(bytes: &[u8]) -> String {
    let mut body = String::from(INDENT);
    let mut line_len = 0;

    for byte in bytes {
        let token = format!("0x{byte:02x}, ");
        if line_len + token.len() > MAX_LINE_LEN {
            body.push('\n');
            body.push_str(INDENT);
            line_len = 0;
        }
        line_len += token.len();
        body.push_str(&token);
    }

    body.trim_end_matches(", ").to_string()
}
