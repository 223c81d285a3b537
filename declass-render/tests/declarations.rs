//! End-to-end rendering tests over full type declarations.
//!
//! These build descriptor graphs the way an acquisition collaborator would
//! and assert on the exact text the engine produces.

use declass_model::{
    AnnotationInstance, ClassRef, ConstructorDescriptor, FieldDescriptor, MethodDescriptor,
    Parameter, Primitive, RenderOptions, TypeArena, TypeDescriptor, TypeId, TypeKind,
    TypeParameter, TypeRef, Value,
};
use declass_render::DeclarationRenderer;

fn int() -> TypeRef {
    TypeRef::Primitive(Primitive::Int)
}

fn string() -> TypeRef {
    TypeRef::class("java.lang.String")
}

/// A repository-style class exercising imports, generics, annotations,
/// constants, and every member section at once.
fn repository_arena() -> (TypeArena, TypeId) {
    let mut arena = TypeArena::new();

    let tag = |name: &str| {
        AnnotationInstance::new("com.example.meta.Tag")
            .member("value", Value::string(name))
            .repeatable_in("com.example.meta.Tags")
    };
    let tags = AnnotationInstance::new("com.example.meta.Tags").member(
        "value",
        Value::Array(vec![
            Value::Annotation(tag("storage")),
            Value::Annotation(tag("audited")),
        ]),
    );

    let id = arena.alloc(
        TypeDescriptor::new("com.example.repo.UserRepository", TypeKind::Class)
            .modifiers(0x0001)
            .annotation(tags)
            .type_param(TypeParameter::new("T").bound(TypeRef::class("com.example.repo.Entity")))
            .superclass(TypeRef::class("com.example.base.Repository"))
            .interface(TypeRef::class("java.io.Closeable"))
            .field(
                FieldDescriptor::new("TABLE", string())
                    .modifiers(0x0019)
                    .constant(Value::string("users")),
            )
            .field(
                FieldDescriptor::new(
                    "cache",
                    TypeRef::parameterized(
                        ClassRef::new("java.util.Map"),
                        vec![
                            declass_model::TypeArgument::Reference(string()),
                            declass_model::TypeArgument::Reference(TypeRef::variable("T")),
                        ],
                    ),
                )
                .modifiers(0x0012),
            )
            .constructor(
                ConstructorDescriptor::new()
                    .modifiers(0x0001)
                    .parameter(Parameter::new("table", string())),
            )
            .method(
                MethodDescriptor::new("find", TypeRef::variable("T"))
                    .modifiers(0x0001)
                    .parameter(Parameter::new("key", string()))
                    .throws(TypeRef::class("java.io.IOException")),
            ),
    );

    (arena, id)
}

#[test]
fn test_repository_declaration() {
    let (arena, id) = repository_arena();
    let rendered = DeclarationRenderer::new(&arena).render(id).unwrap();

    assert_eq!(
        rendered,
        "package com.example.repo;\n\
         \n\
         import com.example.base.Repository;\n\
         import com.example.meta.Tag;\n\
         import java.io.Closeable;\n\
         import java.io.IOException;\n\
         import java.util.Map;\n\
         \n\
         @Tag(value = \"storage\")\n\
         @Tag(value = \"audited\")\n\
         public class UserRepository<T extends Entity> extends Repository implements Closeable {\n\
         \x20   public static final String TABLE = \"users\";\n\
         \x20   private final Map<String, T> cache;\n\
         \n\
         \x20   public UserRepository(String table) {\n\
         \x20   }\n\
         \n\
         \x20   public T find(String key) throws IOException {\n\
         \x20   }\n\
         }"
    );
}

#[test]
fn test_repeatable_annotations_render_one_per_line() {
    let (arena, id) = repository_arena();
    let rendered = DeclarationRenderer::new(&arena).render(id).unwrap();

    let tag_lines = rendered.lines().filter(|line| line.starts_with("@Tag")).count();
    assert_eq!(tag_lines, 2);
    assert!(!rendered.contains("@Tags"));
}

#[test]
fn test_same_package_types_are_not_imported() {
    let (arena, id) = repository_arena();
    let rendered = DeclarationRenderer::new(&arena).render(id).unwrap();

    // Entity lives in the main type's own package.
    assert!(!rendered.contains("import com.example.repo.Entity;"));
    assert!(rendered.contains("<T extends Entity>"));
}

#[test]
fn test_colliding_simple_names_qualify_the_second() {
    let mut arena = TypeArena::new();
    let id = arena.alloc(
        TypeDescriptor::new("com.example.Holder", TypeKind::Class)
            .modifiers(0x0001)
            .field(FieldDescriptor::new("left", TypeRef::class("com.first.Pair")).modifiers(0x0002))
            .field(
                FieldDescriptor::new("right", TypeRef::class("com.second.Pair")).modifiers(0x0002),
            ),
    );

    let rendered = DeclarationRenderer::new(&arena).render(id).unwrap();
    assert!(rendered.contains("import com.first.Pair;"));
    assert!(!rendered.contains("import com.second.Pair;"));
    assert!(rendered.contains("private Pair left;"));
    assert!(rendered.contains("private com.second.Pair right;"));
}

#[test]
fn test_disabled_imports_qualify_everything() {
    let (arena, id) = repository_arena();
    let mut options = RenderOptions::default();
    options.enable_imports = false;

    let rendered = DeclarationRenderer::with_options(&arena, options)
        .render(id)
        .unwrap();

    assert!(!rendered.contains("import "));
    assert!(rendered.contains("java.util.Map<java.lang.String, T> cache;"));
    assert!(rendered.contains("extends com.example.base.Repository"));
}

#[test]
fn test_wildcard_bounds() {
    let mut arena = TypeArena::new();
    let id = arena.alloc(
        TypeDescriptor::new("com.example.Sink", TypeKind::Class).method(
            MethodDescriptor::new("drain", TypeRef::Primitive(Primitive::Void))
                .modifiers(0x0001)
                .parameter(Parameter::new(
                    "source",
                    TypeRef::parameterized(
                        ClassRef::new("java.util.List"),
                        vec![declass_model::TypeArgument::extends(TypeRef::class(
                            "java.lang.Number",
                        ))],
                    ),
                )),
        ),
    );

    let rendered = DeclarationRenderer::new(&arena).render(id).unwrap();
    assert!(rendered.contains("void drain(List<? extends Number> source)"));
}

#[test]
fn test_crlf_line_separator() {
    let mut arena = TypeArena::new();
    let id = arena.alloc(
        TypeDescriptor::new("com.example.Simple", TypeKind::Class)
            .modifiers(0x0001)
            .field(FieldDescriptor::new("n", int()).modifiers(0x0002)),
    );

    let mut options = RenderOptions::default();
    options.line_separator = declass_model::LineSeparator::CrLf;
    let rendered = DeclarationRenderer::with_options(&arena, options)
        .render(id)
        .unwrap();

    assert_eq!(
        rendered,
        "package com.example;\r\n\r\npublic class Simple {\r\n    private int n;\r\n}"
    );
}

#[test]
fn test_concurrent_renders_share_one_renderer() {
    let (arena, id) = repository_arena();
    let renderer = DeclarationRenderer::new(&arena);

    let expected = renderer.render(id).unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| renderer.render(id).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_enum_declaration() {
    let mut arena = TypeArena::new();
    let id = arena.alloc(
        TypeDescriptor::new("com.example.Color", TypeKind::Enum)
            .modifiers(0x0011)
            .field(
                FieldDescriptor::new("RED", TypeRef::class("com.example.Color")).modifiers(0x0019),
            ),
    );

    let rendered = DeclarationRenderer::new(&arena).render(id).unwrap();
    assert!(rendered.contains("public final enum Color {"));
    assert!(rendered.contains("    public static final Color RED;"));
}
