//! Generic signature resolution: type-variable declarations, parameterized
//! and wildcard references, and the display-name rules for plain classes.

use declass_model::{ClassRef, TypeArgument, TypeParameter, TypeRef};

use crate::context::RenderContext;

/// Where a type-parameter list is being rendered.
///
/// A type header needs a single space between keyword and name when the
/// list is empty; a member signature needs nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterPosition {
    TypeHeader,
    Member,
}

const UNIVERSAL_SUPERTYPE: &str = "java.lang.Object";

fn is_universal_supertype(ty: &TypeRef) -> bool {
    matches!(ty, TypeRef::Class(class) if class.qualified == UNIVERSAL_SUPERTYPE)
}

/// Render a declared type-parameter list.
///
/// `<T, U extends A & B> ` with a trailing space, or the empty-list form
/// for the position: a single space in a type header, nothing in a member
/// signature. Disabling generic signatures collapses to the empty form.
pub fn render_type_parameters(
    ctx: &mut RenderContext<'_>,
    params: &[TypeParameter],
    position: ParameterPosition,
) -> String {
    let empty = match position {
        ParameterPosition::TypeHeader => " ",
        ParameterPosition::Member => "",
    };

    if params.is_empty() || !ctx.options().show_generic_signatures {
        return empty.to_string();
    }

    let mut declarations = Vec::with_capacity(params.len());
    for param in params {
        let bounds = resolve_bounds(ctx, &param.bounds);
        if bounds.is_empty() {
            declarations.push(param.name.clone());
        } else {
            declarations.push(format!("{} extends {}", param.name, bounds.join(" & ")));
        }
    }

    format!("<{}> ", declarations.join(", "))
}

/// Resolve any type reference to display text, registering every class
/// reference with the import set as a side effect.
///
/// Unclassifiable references resolve to empty text rather than failing.
pub fn resolve_type(ctx: &mut RenderContext<'_>, ty: &TypeRef) -> String {
    match ty {
        TypeRef::Primitive(primitive) => primitive.as_str().to_string(),
        TypeRef::Class(class) => resolve_class(ctx, class),
        TypeRef::Variable(name) => name.clone(),
        TypeRef::Parameterized { raw, args } => {
            let name = resolve_class(ctx, raw);
            if args.is_empty() || !ctx.options().show_generic_signatures {
                return name;
            }
            let arguments: Vec<String> = args
                .iter()
                .map(|arg| render_argument(ctx, arg))
                .collect();
            format!("{}<{}>", name, arguments.join(", "))
        }
        TypeRef::Array(component) => {
            let component = resolve_type(ctx, component);
            if component.is_empty() {
                return component;
            }
            format!("{}[]", component)
        }
        TypeRef::Unknown => String::new(),
    }
}

/// Display name for a class reference.
///
/// Compiler-generated types show their full binary name and are never
/// imported; everything else registers with the import set and shows its
/// simple name unless a collision (or disabled imports) forces the
/// qualified form.
pub fn resolve_class(ctx: &mut RenderContext<'_>, class: &ClassRef) -> String {
    if class.is_synthetic() {
        return class.display_qualified();
    }

    ctx.imports.register(class);
    if ctx.imports.requires_qualification(class) {
        class.display_qualified()
    } else {
        class.display_simple()
    }
}

fn render_argument(ctx: &mut RenderContext<'_>, arg: &TypeArgument) -> String {
    match arg {
        TypeArgument::Reference(ty) => resolve_type(ctx, ty),
        TypeArgument::Wildcard { upper, lower } => {
            let mut wildcard = String::from("?");
            let upper = resolve_bounds(ctx, upper);
            if !upper.is_empty() {
                wildcard.push_str(" extends ");
                wildcard.push_str(&upper.join(" & "));
            }
            let lower: Vec<String> = lower
                .iter()
                .map(|bound| resolve_type(ctx, bound))
                .filter(|bound| !bound.is_empty())
                .collect();
            if !lower.is_empty() {
                wildcard.push_str(" super ");
                wildcard.push_str(&lower.join(" & "));
            }
            wildcard
        }
    }
}

/// Resolve upper bounds, dropping the implicit universal supertype and any
/// bound that resolves to empty text.
fn resolve_bounds(ctx: &mut RenderContext<'_>, bounds: &[TypeRef]) -> Vec<String> {
    bounds
        .iter()
        .filter(|bound| !is_universal_supertype(bound))
        .map(|bound| resolve_type(ctx, bound))
        .filter(|bound| !bound.is_empty())
        .collect()
}
