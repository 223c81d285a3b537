//! Top-level declaration assembly.

use declass_model::{
    ConstructorDescriptor, FieldDescriptor, MemberValue, MethodDescriptor, Parameter,
    RenderOptions, TypeArena, TypeDescriptor, TypeId, TypeKind, TypeRef,
};

use crate::annotation::{render_annotation_block, render_inline_annotations};
use crate::body::BodySource;
use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::generics::{ParameterPosition, render_type_parameters, resolve_type};
use crate::modifier::{Modifiers, render_modifiers};
use crate::value::{render_constant, render_value};

/// Renders type descriptors back into declaration source text.
///
/// The renderer itself is immutable: every [`render`](Self::render) call
/// opens its own [`RenderContext`], so one renderer may serve concurrent
/// renders from multiple threads.
pub struct DeclarationRenderer<'a> {
    arena: &'a TypeArena,
    options: RenderOptions,
    bodies: Option<&'a dyn BodySource>,
}

impl<'a> DeclarationRenderer<'a> {
    /// Create a renderer with default options.
    pub fn new(arena: &'a TypeArena) -> Self {
        Self::with_options(arena, RenderOptions::default())
    }

    /// Create a renderer with explicit options.
    pub fn with_options(arena: &'a TypeArena, options: RenderOptions) -> Self {
        Self {
            arena,
            options,
            bodies: None,
        }
    }

    /// Attach a decompiler-supplied body source.
    pub fn bodies(mut self, bodies: &'a dyn BodySource) -> Self {
        self.bodies = Some(bodies);
        self
    }

    /// Render the full declaration of `id`: optional `package` header,
    /// resolved import block, then the type with nested members in
    /// declaration order.
    ///
    /// A failed render returns the error and no partial text.
    pub fn render(&self, id: TypeId) -> Result<String> {
        let mut ctx = RenderContext::new(self.arena, &self.options, id);
        let declaration = self.render_type(&mut ctx, id)?;
        let imports = ctx.imports.flush(self.options.line_separator);

        let main = self.arena.get(id);
        let sep = self.options.line_separator.as_str();
        let mut output = String::new();
        if main.enclosing.is_none() && !main.package_name().is_empty() {
            output.push_str("package ");
            output.push_str(main.package_name());
            output.push(';');
            output.push_str(sep);
            output.push_str(sep);
        }
        output.push_str(&imports);
        output.push_str(&declaration);
        Ok(output)
    }

    fn render_type(&self, ctx: &mut RenderContext<'_>, id: TypeId) -> Result<String> {
        let ty = ctx.arena().get(id);
        let type_indent = ctx.type_indent();
        let sep = ctx.sep();
        let blank = format!("{}{}", sep, sep);

        let annotations = render_annotation_block(ctx, &ty.annotations, &type_indent)?;
        let modifiers = render_modifiers(
            Modifiers::from_raw(ty.modifiers),
            self.options.show_non_java_modifiers,
        );
        let generics =
            render_type_parameters(ctx, &ty.type_params, ParameterPosition::TypeHeader);
        let inheritance = self.render_inheritance(ctx, ty);

        let header = format!(
            "{}{}{}{}{}{}{{",
            type_indent,
            modifiers,
            ty.kind.keyword(),
            ty.simple_name(),
            generics,
            inheritance,
        );

        let mut sections: Vec<String> = Vec::new();

        let mut fields = Vec::with_capacity(ty.fields.len());
        for field in &ty.fields {
            fields.push(self.render_field(ctx, field)?);
        }
        if !fields.is_empty() {
            sections.push(fields.join(sep));
        }

        let mut constructors = Vec::with_capacity(ty.constructors.len());
        for constructor in &ty.constructors {
            constructors.push(self.render_constructor(ctx, ty, constructor)?);
        }
        if !constructors.is_empty() {
            sections.push(constructors.join(&blank));
        }

        let mut methods = Vec::with_capacity(ty.methods.len());
        for method in &ty.methods {
            methods.push(self.render_method(ctx, ty, method)?);
        }
        if !methods.is_empty() {
            sections.push(methods.join(&blank));
        }

        if self.options.show_inner_classes && !ty.nested.is_empty() {
            let mut nested = Vec::with_capacity(ty.nested.len());
            for &inner in &ty.nested {
                ctx.push(inner);
                let rendered = self.render_type(ctx, inner);
                ctx.pop();
                nested.push(rendered?);
            }
            sections.push(nested.join(&blank));
        }

        let body = sections.join(&blank);
        if body.is_empty() {
            Ok(format!("{}{}{}{}}}", annotations, header, sep, type_indent))
        } else {
            Ok(format!(
                "{}{}{}{}{}{}}}",
                annotations, header, sep, body, sep, type_indent
            ))
        }
    }

    /// `extends X ` and/or `implements A, B ` clauses, each with a trailing
    /// space so the opening brace lines up.
    fn render_inheritance(&self, ctx: &mut RenderContext<'_>, ty: &TypeDescriptor) -> String {
        let mut clauses = String::new();

        if let Some(superclass) = &ty.superclass {
            let resolved = resolve_type(ctx, superclass);
            if !resolved.is_empty() {
                clauses.push_str("extends ");
                clauses.push_str(&resolved);
                clauses.push(' ');
            }
        }

        let interfaces: Vec<String> = ty
            .interfaces
            .iter()
            .map(|interface| resolve_type(ctx, interface))
            .filter(|interface| !interface.is_empty())
            .collect();
        if !interfaces.is_empty() {
            let keyword = if ty.kind == TypeKind::Interface {
                "extends "
            } else {
                "implements "
            };
            clauses.push_str(keyword);
            clauses.push_str(&interfaces.join(", "));
            clauses.push(' ');
        }

        clauses
    }

    fn render_field(&self, ctx: &mut RenderContext<'_>, field: &FieldDescriptor) -> Result<String> {
        let indent = ctx.member_indent();
        let annotations = render_annotation_block(ctx, &field.annotations, &indent)?;
        let modifiers = render_modifiers(
            Modifiers::from_raw(field.modifiers),
            self.options.show_non_java_modifiers,
        );
        let ty = resolve_type(ctx, &field.ty);
        let constant = render_constant(ctx, field)?;

        Ok(format!(
            "{}{}{}{} {}{};",
            annotations, indent, modifiers, ty, field.name, constant
        ))
    }

    fn render_method(
        &self,
        ctx: &mut RenderContext<'_>,
        declaring: &TypeDescriptor,
        method: &MethodDescriptor,
    ) -> Result<String> {
        let indent = ctx.member_indent();
        let annotations = render_annotation_block(ctx, &method.annotations, &indent)?;
        let default_marker = if method.is_default { "default " } else { "" };
        let modifiers = render_modifiers(
            Modifiers::from_raw(method.modifiers),
            self.options.show_non_java_modifiers,
        );
        let generics =
            render_type_parameters(ctx, &method.type_params, ParameterPosition::Member);
        let return_type = resolve_type(ctx, &method.return_type);
        let parameters = self.render_parameters(ctx, &method.parameters)?;
        let throws = self.render_throws(ctx, &method.throws);
        let terminator = self.method_terminator(ctx, declaring, method, &indent)?;

        Ok(format!(
            "{}{}{}{}{}{} {}({}){}{}",
            annotations,
            indent,
            default_marker,
            modifiers,
            generics,
            return_type,
            method.name,
            parameters,
            throws,
            terminator,
        ))
    }

    fn render_constructor(
        &self,
        ctx: &mut RenderContext<'_>,
        declaring: &TypeDescriptor,
        constructor: &ConstructorDescriptor,
    ) -> Result<String> {
        let indent = ctx.member_indent();
        let annotations = render_annotation_block(ctx, &constructor.annotations, &indent)?;
        let modifiers = render_modifiers(
            Modifiers::from_raw(constructor.modifiers),
            self.options.show_non_java_modifiers,
        );
        let generics =
            render_type_parameters(ctx, &constructor.type_params, ParameterPosition::Member);
        let parameters = self.render_parameters(ctx, &constructor.parameters)?;
        let throws = self.render_throws(ctx, &constructor.throws);

        let body = self
            .bodies
            .and_then(|bodies| bodies.constructor_body(declaring, constructor))
            .map(|body| format!(" {}", body))
            .unwrap_or_else(|| self.stub_body(ctx, &indent));

        Ok(format!(
            "{}{}{}{}{}({}){}{}",
            annotations,
            indent,
            modifiers,
            generics,
            declaring.simple_name(),
            parameters,
            throws,
            body,
        ))
    }

    fn render_parameters(
        &self,
        ctx: &mut RenderContext<'_>,
        parameters: &[Parameter],
    ) -> Result<String> {
        let mut rendered = Vec::with_capacity(parameters.len());
        for parameter in parameters {
            let annotations = render_inline_annotations(ctx, &parameter.annotations)?;
            let mut ty = resolve_type(ctx, &parameter.ty);
            if parameter.varargs && self.options.show_var_args {
                if ty.ends_with("[]") {
                    ty.truncate(ty.len() - 2);
                }
                ty.push_str("...");
            }

            if annotations.is_empty() {
                rendered.push(format!("{} {}", ty, parameter.name));
            } else {
                rendered.push(format!("{} {} {}", annotations, ty, parameter.name));
            }
        }
        Ok(rendered.join(", "))
    }

    fn render_throws(&self, ctx: &mut RenderContext<'_>, throws: &[TypeRef]) -> String {
        let thrown: Vec<String> = throws
            .iter()
            .map(|ty| resolve_type(ctx, ty))
            .filter(|ty| !ty.is_empty())
            .collect();
        if thrown.is_empty() {
            return String::new();
        }
        format!(" throws {}", thrown.join(", "))
    }

    /// Everything after the parameter list: an annotation-member
    /// ` default value;`, a bare `;` for bodiless methods, a spliced
    /// decompiled body, or an empty stub.
    fn method_terminator(
        &self,
        ctx: &mut RenderContext<'_>,
        declaring: &TypeDescriptor,
        method: &MethodDescriptor,
        indent: &str,
    ) -> Result<String> {
        if declaring.kind == TypeKind::Annotation {
            let default = match &method.default_value {
                Some(MemberValue::Value(value)) => {
                    let rendered = render_value(ctx, value)?;
                    if rendered.is_empty() {
                        String::new()
                    } else {
                        format!(" default {}", rendered)
                    }
                }
                Some(MemberValue::Inaccessible) => {
                    return Err(Error::annotation_value(&declaring.qualified, &method.name));
                }
                None => String::new(),
            };
            return Ok(format!("{};", default));
        }

        let modifiers = Modifiers::from_raw(method.modifiers);
        if modifiers.contains(Modifiers::ABSTRACT) || modifiers.contains(Modifiers::NATIVE) {
            return Ok(";".to_string());
        }

        if let Some(body) = self
            .bodies
            .and_then(|bodies| bodies.method_body(declaring, method))
        {
            return Ok(format!(" {}", body));
        }

        Ok(self.stub_body(ctx, indent))
    }

    fn stub_body(&self, ctx: &RenderContext<'_>, indent: &str) -> String {
        format!(" {{{}{}}}", ctx.sep(), indent)
    }
}
