// Resolution engine tests against the embedded desktop GL tables

use super::*;
use crate::config::ConfigTables;

fn gl_config() -> ConfigStore {
    ConfigStore::default_gl().expect("Failed to load default config")
}

fn keep_config() -> ConfigStore {
    let mut tables = ConfigTables::default_gl().unwrap();
    tables.unmatched_functions = UnmatchedFunctions::Keep;
    ConfigStore::from_tables(tables).unwrap()
}

fn sample_registry() -> Vec<RawSymbol> {
    vec![
        RawSymbol::function("glGetQueryObjectui64v", &["id", "pname", "params"]),
        RawSymbol::function("glUniformMatrix2x3fv", &["location", "count", "transpose", "value"]),
        RawSymbol::function("glTexParameterIiv", &["target", "pname", "params"]),
        RawSymbol::function("glUniform1fvARB", &["location", "count", "value"]),
        RawSymbol::enumerant("GL_NEAREST", &["TextureMagFilter", "TextureMinFilter"]),
        RawSymbol::enumerant("GL_LINEAR", &[]),
        RawSymbol::enumerant("GL_MIN", &["BlendEquationModeEXT"]),
        RawSymbol::enumerant("GL_INVALID_INDEX", &["SpecialNumbers"]),
        RawSymbol::enumerant("GL_TEXTURE_2D_ARB", &["TextureTarget"]),
        RawSymbol::type_name("GLsync"),
        RawSymbol::type_name("GLuint"),
    ]
}

#[test]
fn test_query_object_ui64v_scenario() {
    let config = gl_config();
    let engine = Engine::new(&config);

    let resolved = engine
        .resolve_function(&RawSymbol::function("glGetQueryObjectui64v", &[]))
        .unwrap();
    assert_eq!(resolved.canonical_name, "glGetQueryObject_ui64v");
    assert_eq!(resolved.vendor_tag, None);
    assert_eq!(resolved.kind, SymbolKind::Function);
}

#[test]
fn test_matrix_suffix_beats_fv() {
    let config = gl_config();
    let engine = Engine::new(&config);

    let resolved = engine
        .resolve_function(&RawSymbol::function("glUniformMatrix2x3fv", &[]))
        .unwrap();
    assert_eq!(resolved.canonical_name, "glUniformMatrix_2x3_fv");
}

#[test]
fn test_integer_texture_parameter() {
    let config = gl_config();
    let engine = Engine::new(&config);

    let iiv = engine
        .resolve_function(&RawSymbol::function("glTexParameterIiv", &[]))
        .unwrap();
    let iuiv = engine
        .resolve_function(&RawSymbol::function("glTexParameterIuiv", &[]))
        .unwrap();
    assert_eq!(iiv.canonical_name, "glTexParameter_i_iv");
    assert_eq!(iuiv.canonical_name, "glTexParameter_i_uiv");
}

#[test]
fn test_vendor_tag_appended_after_suffix() {
    let config = gl_config();
    let engine = Engine::new(&config);

    let resolved = engine
        .resolve_function(&RawSymbol::function("glUniform1fvARB", &[]))
        .unwrap();
    assert_eq!(resolved.canonical_name, "glUniform_1fv_ARB");
    assert_eq!(resolved.vendor_tag.as_deref(), Some("_ARB"));
}

#[test]
fn test_unknown_suffix_reported_with_raw_name() {
    let config = gl_config();
    let engine = Engine::new(&config);

    let err = engine
        .resolve_function(&RawSymbol::function("glClearEXT", &[]))
        .unwrap_err();
    assert_eq!(
        err,
        ResolveError::UnknownSuffix {
            raw_name: "glClearEXT".to_string(),
            base: "glClear".to_string(),
        }
    );
    assert_eq!(err.raw_name(), "glClearEXT");
    assert!(err.to_string().contains("glClearEXT"));
}

#[test]
fn test_unmatched_keep_policy() {
    let config = keep_config();
    let engine = Engine::new(&config);

    let clear = engine
        .resolve_function(&RawSymbol::function("glClear", &[]))
        .unwrap();
    let blend = engine
        .resolve_function(&RawSymbol::function("glBlendBarrierKHR", &[]))
        .unwrap();
    assert_eq!(clear.canonical_name, "glClear");
    assert_eq!(blend.canonical_name, "glBlendBarrier_KHR");
}

#[test]
fn test_reserved_parameter_names_escaped() {
    let config = gl_config();
    let engine = Engine::new(&config);

    let resolved = engine
        .resolve_function(&RawSymbol::function("glFoo1i", &["min", "max", "x"]))
        .unwrap();
    assert_eq!(resolved.params, vec!["min_", "max_", "x"]);
}

#[test]
fn test_enumerant_member_identifiers() {
    let config = gl_config();
    let engine = Engine::new(&config);
    let groups = EnumGroupTable::default();

    let resolve = |name: &str| {
        engine
            .resolve_enumerant(&RawSymbol::enumerant(name, &[]), &groups)
            .unwrap()
    };

    assert_eq!(resolve("GL_MIN").canonical_name, "min_");
    assert_eq!(resolve("GL_FLOAT").canonical_name, "float_");
    assert_eq!(resolve("GL_NEAREST").canonical_name, "nearest");
    assert_eq!(resolve("GL_2D").canonical_name, "_2d");

    let arb = resolve("GL_TEXTURE_2D_ARB");
    assert_eq!(arb.canonical_name, "texture_2d_arb");
    assert_eq!(arb.vendor_tag.as_deref(), Some("_ARB"));
}

#[test]
fn test_excluded_enumerant_not_emitted() {
    let config = gl_config();
    let engine = Engine::new(&config);

    let raw = RawSymbol::enumerant("GL_INVALID_INDEX", &["SpecialNumbers"]);
    assert!(engine
        .resolve_enumerant(&raw, &EnumGroupTable::default())
        .is_none());

    let resolution = engine.run(&[raw]);
    assert!(resolution.symbols.is_empty());
    assert!(resolution
        .groups
        .iter()
        .all(|g| !g.members.iter().any(|m| m == "GL_INVALID_INDEX")));
}

#[test]
fn test_handle_types() {
    let config = gl_config();
    let engine = Engine::new(&config);

    let sync = engine.resolve_type(&RawSymbol::type_name("GLsync"));
    let uint = engine.resolve_type(&RawSymbol::type_name("GLuint"));
    assert!(sync.is_opaque_handle);
    assert!(!uint.is_opaque_handle);
    assert_eq!(sync.canonical_name, "GLsync");
}

#[test]
fn test_run_memberships_and_groups() {
    let config = gl_config();
    let engine = Engine::new(&config);

    let resolution = engine.run(&sample_registry());
    assert!(resolution.is_complete());

    let nearest = resolution
        .symbols
        .iter()
        .find(|s| s.raw_name == "GL_NEAREST")
        .unwrap();
    assert_eq!(
        nearest.group_memberships,
        vec!["TextureMagFilter", "TextureMinFilter"]
    );

    // Registry left GL_LINEAR ungrouped; the extra tables add it
    let linear = resolution
        .symbols
        .iter()
        .find(|s| s.raw_name == "GL_LINEAR")
        .unwrap();
    assert_eq!(
        linear.group_memberships,
        vec!["TextureMagFilter", "TextureMinFilter"]
    );

    let mag = resolution
        .groups
        .iter()
        .find(|g| g.name == "TextureMagFilter")
        .unwrap();
    assert_eq!(mag.members, vec!["GL_NEAREST", "GL_LINEAR"]);

    // Registry-declared member first, extra member appended
    let target = resolution
        .groups
        .iter()
        .find(|g| g.name == "TextureTarget")
        .unwrap();
    assert_eq!(target.members, vec!["GL_TEXTURE_2D_ARB", "GL_TEXTURE_BUFFER"]);
}

#[test]
fn test_run_preserves_input_order() {
    let config = gl_config();
    let engine = Engine::new(&config);

    let registry = sample_registry();
    let resolution = engine.run(&registry);
    let names: Vec<&str> = resolution
        .symbols
        .iter()
        .map(|s| s.raw_name.as_str())
        .collect();
    let expected: Vec<&str> = registry
        .iter()
        .map(|s| s.name.as_str())
        .filter(|name| *name != "GL_INVALID_INDEX")
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn test_errors_collected_across_pass() {
    let config = gl_config();
    let engine = Engine::new(&config);

    let registry = vec![
        RawSymbol::function("glClear", &["mask"]),
        RawSymbol::function("glUniform1f", &["location", "v0"]),
        RawSymbol::function("glFlush", &[]),
    ];
    let resolution = engine.run(&registry);

    assert_eq!(resolution.symbols.len(), 1);
    assert_eq!(resolution.errors.len(), 2);
    assert_eq!(resolution.errors[0].raw_name(), "glClear");
    assert_eq!(resolution.errors[1].raw_name(), "glFlush");

    let err = resolution.into_result().unwrap_err();
    assert_eq!(err.errors.len(), 2);
    assert_eq!(err.to_string(), "2 symbol(s) could not be resolved");
}

#[test]
fn test_parallel_matches_sequential() {
    let config = gl_config();
    let engine = Engine::new(&config);

    let mut registry = sample_registry();
    registry.push(RawSymbol::function("glFlush", &[]));
    for i in 0..200 {
        registry.push(RawSymbol::function(format!("glVertexAttrib{}fv", i % 4 + 1), &[]));
        registry.push(RawSymbol::enumerant(format!("GL_CONST_{}", i), &["Generated"]));
    }

    let sequential = engine.run(&registry);
    for jobs in [2, 3, 8, 64] {
        assert_eq!(engine.run_with_jobs(&registry, jobs), sequential);
    }
}

#[test]
fn test_rerun_is_identical() {
    let config = gl_config();
    let engine = Engine::new(&config);

    let registry = sample_registry();
    assert_eq!(engine.run(&registry), engine.run(&registry));
}

#[test]
fn test_empty_registry() {
    let config = gl_config();
    let engine = Engine::new(&config);

    let resolution = engine.run_with_jobs(&[], 4);
    assert!(resolution.symbols.is_empty());
    assert!(resolution.is_complete());
    // Extra groups exist even without registry input
    assert_eq!(resolution.groups.len(), 12);
}
