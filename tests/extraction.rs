use classdoc_core::{
    create_renderer, extract, extract_report, Access, DiagnosticLevel, ExtractConfig,
    ExtractorManager, ParseTier, UNCATEGORIZED, UNDOCUMENTED,
};

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(path).unwrap()
}

// -- parsed tier --

#[test]
fn simple_class() {
    let model = extract(&fixture("simple.js"), "simple.js");

    assert_eq!(model.class_info.class_name, "Foo");
    assert_eq!(model.class_info.description, "Does X");
    assert_eq!(model.class_info.source_path, "simple.js");

    let bar = &model.methods[0];
    assert_eq!(bar.name, "bar");
    assert_eq!(bar.access, Access::Public);
    assert!(!bar.is_static);
    assert_eq!(bar.parameters[0].name, "x");
    assert_eq!(bar.parameters[0].param_type, "string");
    assert_eq!(bar.parameters[0].description, "desc");

    let helper = &model.methods[1];
    assert_eq!(helper.name, "_helper");
    assert_eq!(helper.access, Access::Private);
}

#[test]
fn undocumented_class() {
    let report = extract_report(&fixture("undocumented.js"), "undocumented.js");
    assert_eq!(report.tier, ParseTier::Parsed);

    let model = report.model;
    assert_eq!(model.class_info.class_name, "Plain");
    assert_eq!(model.class_info.extends_name, "Base");
    assert_eq!(model.class_info.description, UNDOCUMENTED);
    assert!(model.methods.iter().all(|m| m.description == UNDOCUMENTED));

    let access: Vec<_> = model.methods.iter().map(|m| m.access).collect();
    assert_eq!(access, vec![Access::Constructor, Access::Public, Access::Static]);
    assert_eq!(model.class_methods().count(), 1);
    assert_eq!(model.instance_methods().count(), 2);
    assert_eq!(model.methods_by_category.len(), 1);
    assert_eq!(model.methods_by_category[UNCATEGORIZED].len(), 3);
}

#[test]
fn resource_file_class() {
    let report = extract_report(&fixture("resource_file.js"), "library/ResourceFile.js");
    assert_eq!(report.tier, ParseTier::Parsed);
    assert!(!report.diagnostics.iter().any(|d| d.level == DiagnosticLevel::Error));

    let model = report.model;
    assert_eq!(model.class_info.class_name, "ResourceFile");
    assert_eq!(model.class_info.extends_name, "BaseNode");
    assert_eq!(
        model.class_info.description,
        "A file resource that loads its data on demand."
    );

    let names: Vec<_> = model.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["initPrototypeSlots", "withPath", "load", "components", "_resetState"]
    );

    let slots = &model.methods[0];
    assert_eq!(slots.description, "Declares the slots of every instance.");
    assert_eq!(slots.signature, "initPrototypeSlots()");

    let with_path = &model.methods[1];
    assert!(with_path.is_static);
    assert_eq!(with_path.access, Access::Static);
    assert_eq!(with_path.category, "Construction");
    let returns = with_path.returns.as_ref().unwrap();
    assert_eq!(returns.return_type, "ResourceFile");
    assert_eq!(returns.description.as_deref(), Some("The new resource"));

    let load = &model.methods[2];
    assert!(load.is_async);
    assert_eq!(load.category, "Loading");
    assert_eq!(
        load.returns.as_ref().unwrap().return_type,
        "Promise&lt;ResourceFile&gt;"
    );
    assert!(load.throws.as_deref().unwrap().contains("When the request fails"));
    assert!(load.source_text.starts_with("async load () {"));
    assert!(load.source_text.ends_with("\n}"));

    let components = &model.methods[3];
    assert_eq!(components.description, "Path split into its components.");
    assert_eq!(components.deprecated.as_deref(), Some("Use pathParts()"));

    let reset = &model.methods[4];
    assert_eq!(reset.access, Access::Private);
    assert_eq!(reset.signature, "_resetState(keepData, ...extra)");
    assert_eq!(reset.description, "Clears transient state.");

    let property_categories: Vec<_> = model.properties_by_category.keys().cloned().collect();
    assert_eq!(property_categories, vec!["File Properties", "Loading"]);
    let loading = &model.properties_by_category["Loading"][0];
    assert_eq!(loading.name, "isLoading");
    assert_eq!(loading.default.as_deref(), Some("false"));

    let method_categories: Vec<_> = model.methods_by_category.keys().cloned().collect();
    assert_eq!(
        method_categories,
        vec![UNCATEGORIZED, "Construction", "Loading", "File Properties"]
    );
}

#[test]
fn repeated_extraction_is_identical() {
    let text = fixture("resource_file.js");
    assert_eq!(extract(&text, "a.js"), extract(&text, "a.js"));
}

// -- degraded tiers --

#[test]
fn wrapped_class_with_syntax_error_is_recovered() {
    let report = extract_report(&fixture("wrapped_broken.js"), "RecordStore.js");
    assert_eq!(report.tier, ParseTier::Recovered);
    assert!(report
        .diagnostics
        .iter()
        .any(|d| d.level == DiagnosticLevel::Warning && d.line.is_some()));

    let model = report.model;
    assert_eq!(model.class_info.class_name, "RecordStore");
    assert_eq!(model.class_info.description, "A store that keeps records.");
    assert_eq!(model.methods.len(), 1);
    assert_eq!(model.methods[0].name, "add");
    assert_eq!(model.methods[0].description, "Adds a record.");
    assert_eq!(model.properties_by_category["Data"][0].name, "records");
}

#[test]
fn unbalanced_braces_use_regex_fallback() {
    let report = extract_report(&fixture("malformed.js"), "Broken.js");
    assert_eq!(report.tier, ParseTier::Fallback);

    let model = report.model;
    assert_eq!(model.class_info.class_name, "Broken");
    assert_eq!(model.class_info.extends_name, "Base");
    assert!(model.class_info.description.contains("Fallback parsing applied"));

    let names: Vec<_> = model.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["open", "close"]);
    assert_eq!(model.methods[0].signature, "open(a, b)");
    assert_eq!(model.methods[0].parameters[0].param_type, "unknown");
    assert_eq!(model.methods[0].start_line, 2);
    assert!(model.properties_by_category.is_empty());
}

#[test]
fn disabling_recovery_goes_straight_to_fallback() {
    let manager = ExtractorManager::with_config(ExtractConfig {
        recover: false,
        include_source: true,
    });
    let report = manager.extract_report(&fixture("wrapped_broken.js"), "RecordStore.js");
    assert_eq!(report.tier, ParseTier::Fallback);
    assert_eq!(report.model.class_info.class_name, "RecordStore");
}

// -- batch and rendering --

#[test]
fn batch_matches_single_extraction() {
    let names = ["simple.js", "undocumented.js", "resource_file.js", "malformed.js"];
    let inputs: Vec<(String, String)> = names
        .iter()
        .map(|n| (fixture(n), n.to_string()))
        .collect();

    let manager = ExtractorManager::new();
    let reports = manager.extract_batch(&inputs);
    assert_eq!(reports.len(), names.len());
    for ((text, path), report) in inputs.iter().zip(&reports) {
        assert_eq!(report.model, manager.extract(text, path));
    }
}

#[test]
fn xml_document_for_resource_file() {
    let model = extract(&fixture("resource_file.js"), "library/ResourceFile.js");
    let xml = create_renderer("xml").unwrap().render(&model);

    assert!(xml.contains("<className>ResourceFile</className>"));
    assert!(xml.contains(
        "<filePath><a href=\"library/ResourceFile.js\">library/ResourceFile.js</a></filePath>"
    ));
    assert!(xml.contains("<classMethods>"));
    assert!(xml.contains("<instanceMethods>"));
    assert!(xml.contains("<propertyname>isLoading</propertyname>"));
    assert!(xml.contains("async=\"true\">load()</fullMethodName>"));
    assert!(xml.contains("<paramname>path</paramname>"));
}

#[test]
fn json_document_round_trips() {
    let model = extract(&fixture("simple.js"), "simple.js");
    let json = create_renderer("json").unwrap().render(&model);
    let parsed: classdoc_core::DocumentationModel = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, model);
}
