//! Literal rendering for runtime and constant values.

use declass_model::{FieldConstant, FieldDescriptor, TypeRef, Value};

use crate::annotation::render_annotation;
use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::generics::{resolve_class, resolve_type};
use crate::modifier::Modifiers;

/// Render a value as source literal text.
///
/// Numeric literals carry their type suffix (`L`, `f`, `d`), strings and
/// characters are quoted and escaped, enum constants and class literals
/// resolve their type through the import set, and arrays collapse per the
/// single-element/empty rules.
pub fn render_value(ctx: &mut RenderContext<'_>, value: &Value) -> Result<String> {
    let text = match value {
        Value::Boolean(v) => v.to_string(),
        Value::Byte(v) => v.to_string(),
        Value::Short(v) => v.to_string(),
        Value::Int(v) => v.to_string(),
        Value::Long(v) => format!("{}L", v),
        Value::Float(v) => format!("{}f", decimal_form(v.to_string())),
        Value::Double(v) => format!("{}d", decimal_form(v.to_string())),
        Value::Char(v) => format!("'{}'", escape_char(*v)),
        Value::Str(v) => format!("\"{}\"", escape_str(v)),
        Value::Enum { ty, constant } => {
            format!("{}.{}", resolve_class(ctx, ty), constant)
        }
        Value::ClassLiteral(ty) => {
            let resolved = resolve_type(ctx, ty);
            if resolved.is_empty() {
                String::new()
            } else {
                format!("{}.class", resolved)
            }
        }
        Value::Annotation(annotation) => render_annotation(ctx, annotation)?,
        Value::Array(values) => render_array(ctx, values)?,
    };

    Ok(text)
}

/// Render the ` = value` initializer suffix for a field.
///
/// Constants exist only on static fields; anything else renders nothing.
/// An inaccessible constant is a hard failure naming the field.
pub fn render_constant(ctx: &mut RenderContext<'_>, field: &FieldDescriptor) -> Result<String> {
    if !ctx.options().display_field_values {
        return Ok(String::new());
    }
    if !Modifiers::from_raw(field.modifiers).contains(Modifiers::STATIC) {
        return Ok(String::new());
    }

    match &field.constant {
        FieldConstant::None => Ok(String::new()),
        FieldConstant::Inaccessible => Err(Error::field_constant(&field.name)),
        FieldConstant::Value(value) => {
            let rendered = render_value(ctx, value)?;
            if rendered.is_empty() {
                Ok(String::new())
            } else {
                Ok(format!(" = {}", rendered))
            }
        }
    }
}

fn render_array(ctx: &mut RenderContext<'_>, values: &[Value]) -> Result<String> {
    if values.len() == 1 {
        return render_value(ctx, &values[0]);
    }

    let mut rendered = Vec::with_capacity(values.len());
    for value in values {
        let text = render_value(ctx, value)?;
        if !text.is_empty() {
            rendered.push(text);
        }
    }

    if rendered.is_empty() {
        return Ok(String::new());
    }
    Ok(format!("{{{}}}", rendered.join(", ")))
}

/// Format a floating-point value so it always carries a decimal point.
fn decimal_form(text: String) -> String {
    if text.contains('.') || text.contains('e') || text.contains("NaN") || text.contains("inf") {
        text
    } else {
        format!("{}.0", text)
    }
}

fn escape_char(c: char) -> String {
    match c {
        '\'' => "\\'".to_string(),
        other => escape_common(other),
    }
}

fn escape_str(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            other => escaped.push_str(&escape_common(other)),
        }
    }
    escaped
}

/// Escape sequences shared by character and string literals.
fn escape_common(c: char) -> String {
    match c {
        '\\' => "\\\\".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        '\u{0008}' => "\\b".to_string(),
        '\u{000C}' => "\\f".to_string(),
        other => other.to_string(),
    }
}
