//! Annotation rendering: instances, repeatable unrolling, and default
//! suppression.

use declass_model::{AnnotationInstance, MemberValue, Value};

use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::generics::resolve_class;
use crate::value::render_value;

/// Render one annotation instance: `@Type` or `@Type(name = value, …)`.
///
/// Members equal to their declared default are suppressed (element-wise
/// for arrays) unless the show-defaults toggle is active; when nothing
/// survives, the parentheses are omitted entirely.
pub fn render_annotation(
    ctx: &mut RenderContext<'_>,
    annotation: &AnnotationInstance,
) -> Result<String> {
    let name = resolve_class(ctx, &annotation.ty);
    let arguments = render_arguments(ctx, annotation)?;
    Ok(format!("@{}{}", name, arguments))
}

/// Render declared annotations one per line at the given indent, with a
/// trailing line separator. Used above type, field, and method
/// declarations.
pub fn render_annotation_block(
    ctx: &mut RenderContext<'_>,
    annotations: &[AnnotationInstance],
    indent: &str,
) -> Result<String> {
    if !ctx.options().show_annotation_types || annotations.is_empty() {
        return Ok(String::new());
    }

    let sep = ctx.sep();
    let mut block = String::new();
    for annotation in unroll(annotations) {
        block.push_str(indent);
        block.push_str(&render_annotation(ctx, annotation)?);
        block.push_str(sep);
    }
    Ok(block)
}

/// Render declared annotations space-joined on one line. Used inside
/// parameter lists.
pub fn render_inline_annotations(
    ctx: &mut RenderContext<'_>,
    annotations: &[AnnotationInstance],
) -> Result<String> {
    if !ctx.options().show_annotation_types || annotations.is_empty() {
        return Ok(String::new());
    }

    let mut rendered = Vec::new();
    for annotation in unroll(annotations) {
        rendered.push(render_annotation(ctx, annotation)?);
    }
    Ok(rendered.join(" "))
}

/// Expand repeatable-annotation containers into their element instances,
/// preserving overall order. Non-container annotations pass through.
pub fn unroll(annotations: &[AnnotationInstance]) -> Vec<&AnnotationInstance> {
    let mut unrolled = Vec::with_capacity(annotations.len());
    for annotation in annotations {
        match container_elements(annotation) {
            Some(elements) => unrolled.extend(elements),
            None => unrolled.push(annotation),
        }
    }
    unrolled
}

/// The element instances of a repeatable container, when this instance is
/// one: its `value` member holds a non-empty array of annotations, each
/// marked repeatable-by this very type.
fn container_elements(annotation: &AnnotationInstance) -> Option<Vec<&AnnotationInstance>> {
    let member = annotation
        .members
        .iter()
        .find(|member| member.name == "value")?;

    let Some(Value::Array(values)) = member.value.value() else {
        return None;
    };
    if values.is_empty() {
        return None;
    }

    let mut elements = Vec::with_capacity(values.len());
    for value in values {
        let Value::Annotation(element) = value else {
            return None;
        };
        if element.repeatable_container.as_deref() != Some(annotation.ty.qualified.as_str()) {
            return None;
        }
        elements.push(element);
    }
    Some(elements)
}

fn render_arguments(
    ctx: &mut RenderContext<'_>,
    annotation: &AnnotationInstance,
) -> Result<String> {
    let show_defaults = ctx.options().show_default_annotation_values;
    let mut arguments = Vec::new();

    for member in &annotation.members {
        let value = match &member.value {
            MemberValue::Value(value) => value,
            MemberValue::Inaccessible => {
                return Err(Error::annotation_value(
                    &annotation.ty.qualified,
                    &member.name,
                ));
            }
        };

        if !show_defaults && member.default.as_ref() == Some(value) {
            continue;
        }

        arguments.push(format!("{} = {}", member.name, render_value(ctx, value)?));
    }

    if arguments.is_empty() {
        return Ok(String::new());
    }
    Ok(format!("({})", arguments.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use declass_model::{RenderOptions, TypeArena, TypeDescriptor, TypeKind};

    struct Fixture {
        arena: TypeArena,
        options: RenderOptions,
        main: declass_model::TypeId,
    }

    impl Fixture {
        fn new() -> Self {
            Self::with_options(RenderOptions::default())
        }

        fn with_options(options: RenderOptions) -> Self {
            let mut arena = TypeArena::new();
            let main = arena.alloc(TypeDescriptor::new("com.example.Box", TypeKind::Class));
            Self {
                arena,
                options,
                main,
            }
        }

        fn ctx(&self) -> RenderContext<'_> {
            RenderContext::new(&self.arena, &self.options, self.main)
        }
    }

    fn tag(name: &str) -> AnnotationInstance {
        AnnotationInstance::new("com.example.Tag")
            .member("name", Value::string(name))
            .repeatable_in("com.example.Tags")
    }

    fn tags_container(names: &[&str]) -> AnnotationInstance {
        let elements = names
            .iter()
            .map(|name| Value::Annotation(tag(name)))
            .collect();
        AnnotationInstance::new("com.example.Tags").member("value", Value::Array(elements))
    }

    #[test]
    fn test_annotation_without_arguments() {
        let fixture = Fixture::new();
        let mut ctx = fixture.ctx();

        let annotation = AnnotationInstance::new("java.lang.Deprecated");
        assert_eq!(
            render_annotation(&mut ctx, &annotation).unwrap(),
            "@Deprecated"
        );
    }

    #[test]
    fn test_annotation_arguments_in_declaration_order() {
        let fixture = Fixture::new();
        let mut ctx = fixture.ctx();

        let annotation = AnnotationInstance::new("com.example.Column")
            .member("name", Value::string("id"))
            .member("unique", Value::Boolean(true));
        assert_eq!(
            render_annotation(&mut ctx, &annotation).unwrap(),
            "@Column(name = \"id\", unique = true)"
        );
    }

    #[test]
    fn test_all_default_members_render_bare() {
        let fixture = Fixture::new();
        let mut ctx = fixture.ctx();

        let annotation = AnnotationInstance::new("com.example.Cached").member_with_default(
            "ttl",
            Value::Int(60),
            Value::Int(60),
        );
        assert_eq!(render_annotation(&mut ctx, &annotation).unwrap(), "@Cached");
    }

    #[test]
    fn test_show_defaults_toggle() {
        let mut options = RenderOptions::default();
        options.show_default_annotation_values = true;
        let fixture = Fixture::with_options(options);
        let mut ctx = fixture.ctx();

        let annotation = AnnotationInstance::new("com.example.Cached").member_with_default(
            "ttl",
            Value::Int(60),
            Value::Int(60),
        );
        assert_eq!(
            render_annotation(&mut ctx, &annotation).unwrap(),
            "@Cached(ttl = 60)"
        );
    }

    #[test]
    fn test_array_default_compares_element_wise() {
        let fixture = Fixture::new();
        let mut ctx = fixture.ctx();

        let annotation = AnnotationInstance::new("com.example.Roles").member_with_default(
            "value",
            Value::Array(vec![Value::string("admin")]),
            Value::Array(vec![Value::string("user")]),
        );
        assert_eq!(
            render_annotation(&mut ctx, &annotation).unwrap(),
            "@Roles(value = \"admin\")"
        );
    }

    #[test]
    fn test_repeatable_container_unrolls() {
        let fixture = Fixture::new();
        let mut ctx = fixture.ctx();

        let container = tags_container(&["a", "b", "c"]);
        let block = render_annotation_block(&mut ctx, std::slice::from_ref(&container), "")
            .unwrap();

        assert_eq!(
            block,
            "@Tag(name = \"a\")\n@Tag(name = \"b\")\n@Tag(name = \"c\")\n"
        );
    }

    #[test]
    fn test_container_of_foreign_elements_stays_intact() {
        let container = AnnotationInstance::new("com.example.Tags").member(
            "value",
            Value::Array(vec![Value::Annotation(AnnotationInstance::new(
                "com.example.Other",
            ))]),
        );
        let annotations = vec![container];
        let unrolled = unroll(&annotations);
        assert_eq!(unrolled.len(), 1);
        assert_eq!(unrolled[0].ty.qualified, "com.example.Tags");
    }

    #[test]
    fn test_inline_annotations_join_with_spaces() {
        let fixture = Fixture::new();
        let mut ctx = fixture.ctx();

        let annotations = vec![
            AnnotationInstance::new("com.example.NotNull"),
            AnnotationInstance::new("com.example.Valid"),
        ];
        assert_eq!(
            render_inline_annotations(&mut ctx, &annotations).unwrap(),
            "@NotNull @Valid"
        );
    }

    #[test]
    fn test_inaccessible_member_is_fatal() {
        let fixture = Fixture::new();
        let mut ctx = fixture.ctx();

        let annotation =
            AnnotationInstance::new("com.example.Sealed").inaccessible_member("token");
        let error = render_annotation(&mut ctx, &annotation).unwrap_err();
        assert!(error.to_string().contains("com.example.Sealed"));
        assert!(error.to_string().contains("token"));
    }

    #[test]
    fn test_annotations_hidden_when_disabled() {
        let mut options = RenderOptions::default();
        options.show_annotation_types = false;
        let fixture = Fixture::with_options(options);
        let mut ctx = fixture.ctx();

        let annotations = vec![tag("a")];
        assert_eq!(
            render_annotation_block(&mut ctx, &annotations, "    ").unwrap(),
            ""
        );
        assert_eq!(
            render_inline_annotations(&mut ctx, &annotations).unwrap(),
            ""
        );
    }
}
