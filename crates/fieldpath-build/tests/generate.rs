//! End-to-end generation over the demo fixture registry.

use fieldpath_build::{
    ConstantFormatter, EmitError, FieldTree, JsonEmitter, RustSourceEmitter, TreeBuilder,
    TreeEmitter, generate,
};
use fieldpath_schema::{Error as SchemaError, registry::Registry, validate::validate_registry};
use fieldpath_testing_demo_fixtures as fixtures;
use proptest::prelude::*;

fn demo_sources() -> Vec<(String, String)> {
    let mut emitter = RustSourceEmitter::new();
    generate(&fixtures::registry(), &ConstantFormatter, &mut emitter)
        .expect("demo generation succeeds");

    emitter.sources().to_vec()
}

#[test]
fn demo_registry_generates_one_file_per_class_in_path_order() {
    let names: Vec<String> = demo_sources().into_iter().map(|(name, _)| name).collect();

    assert_eq!(
        names,
        [
            "demo/pets/best_friend_fields.rs",
            "demo/pets/cat_fields.rs",
            "demo/pets/dog_fields.rs",
            "demo/pets/person_fields.rs",
        ]
    );
}

#[test]
fn person_source_nests_dog_and_truncates_the_owner_cycle() {
    let sources = demo_sources();
    let (_, person) = sources
        .iter()
        .find(|(name, _)| name.ends_with("person_fields.rs"))
        .unwrap();

    assert!(person.contains("pub mod PersonFields"));
    assert!(person.contains("pub mod FAVORITE_DOG"));
    assert!(person.contains("pub const _PATH: &str = \"favorite_dog\";"));
    assert!(person.contains("pub const NAME: &str = \"favorite_dog.name\";"));

    // Dog.owner points back at Person, an ancestor: plain constant.
    assert!(person.contains("pub const OWNER: &str = \"favorite_dog.owner\";"));
    assert!(!person.contains("pub mod OWNER"));

    // two levels down, BestFriend still expands in full
    assert!(person.contains("pub mod BEST_FRIEND"));
    assert!(person.contains("pub const NAME: &str = \"favorite_dog.best_friend.name\";"));

    // the diamond sibling gets its own complete expansion
    assert!(person.contains("pub const NAME: &str = \"first_dog.name\";"));
}

#[test]
fn cat_source_degrades_the_unresolved_shelter_to_a_constant() {
    let sources = demo_sources();
    let (_, cat) = sources
        .iter()
        .find(|(name, _)| name.ends_with("cat_fields.rs"))
        .unwrap();

    assert!(cat.contains("pub const SHELTER: &str = \"shelter\";"));
    assert!(!cat.contains("pub mod SHELTER"));
}

#[test]
fn unresolved_shelter_relation_is_still_a_validation_finding() {
    let SchemaError::Validation(tree) = validate_registry(&fixtures::registry()).unwrap_err();

    assert_eq!(tree.len(), 1);
    assert!(tree.to_string().contains("field 'shelter'"));
}

#[test]
fn json_emitter_collects_one_document_per_class() {
    let mut emitter = JsonEmitter::new();
    generate(&fixtures::registry(), &ConstantFormatter, &mut emitter).unwrap();

    let documents = emitter.into_documents();
    assert_eq!(documents.len(), 4);
    assert!(documents.contains_key("demo::pets::Person"));
}

#[test]
fn emitter_failure_aborts_the_remaining_batch() {
    struct FailOn {
        ident: &'static str,
        inner: RustSourceEmitter,
    }

    impl TreeEmitter for FailOn {
        fn emit(&mut self, tree: &FieldTree) -> Result<(), EmitError> {
            if tree.class.ident == self.ident {
                return Err(EmitError::Render {
                    class: tree.class.path(),
                    message: "disk full".to_string(),
                });
            }
            self.inner.emit(tree)
        }
    }

    let mut emitter = FailOn {
        ident: "Cat",
        inner: RustSourceEmitter::new(),
    };
    let result = generate(&fixtures::registry(), &ConstantFormatter, &mut emitter);

    assert!(result.is_err());

    // BestFriend sorts before Cat; Dog and Person were never reached.
    let names: Vec<&str> = emitter
        .inner
        .sources()
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();
    assert_eq!(names, ["demo/pets/best_friend_fields.rs"]);
}

#[test]
fn registry_insertion_order_does_not_affect_trees() {
    let forward = fixtures::registry();
    let reversed: Registry = [
        fixtures::best_friend(),
        fixtures::cat(),
        fixtures::dog(),
        fixtures::person(),
    ]
    .into_iter()
    .collect();

    let formatter = ConstantFormatter;
    let forward_builder = TreeBuilder::new(&forward, &formatter);
    let reversed_builder = TreeBuilder::new(&reversed, &formatter);

    for (path, class) in forward.iter() {
        let a = forward_builder.build(class).unwrap();
        let b = reversed_builder
            .build(reversed.lookup(path).unwrap())
            .unwrap();

        assert_eq!(a, b, "tree for '{path}' must not depend on batch order");
    }
}

#[test]
fn write_to_dir_persists_every_generated_file() {
    let mut emitter = RustSourceEmitter::new();
    generate(&fixtures::registry(), &ConstantFormatter, &mut emitter).unwrap();

    let dir = std::env::temp_dir().join(format!("fieldpath-generate-{}", std::process::id()));
    emitter.write_to_dir(&dir).unwrap();

    assert!(dir.join("demo/pets/person_fields.rs").is_file());
    assert!(dir.join("demo/pets/best_friend_fields.rs").is_file());

    std::fs::remove_dir_all(&dir).ok();
}

proptest! {
    #[test]
    fn constants_preserve_declaration_order(raw in prop::collection::vec("[a-z]{1,8}", 1..10)) {
        use fieldpath_schema::node::{Class, Def, Field, FieldList};

        let mut idents: Vec<String> = Vec::new();
        for ident in raw {
            if !idents.contains(&ident) {
                idents.push(ident);
            }
        }

        let class = Class::with_fields(
            Def::new("prop::model", "Subject"),
            idents
                .iter()
                .map(|ident| Field::terminal(ident.clone()))
                .collect::<FieldList>(),
        );
        let registry: Registry = [class].into_iter().collect();
        let root = registry.lookup("prop::model::Subject").unwrap();

        let tree = TreeBuilder::new(&registry, &ConstantFormatter)
            .build(root)
            .unwrap();

        let values: Vec<String> = tree
            .entries
            .iter()
            .filter_map(fieldpath_build::Entry::as_constant)
            .map(|c| c.value.clone())
            .collect();

        prop_assert_eq!(values, idents);
    }

    #[test]
    fn building_twice_is_deterministic(idents in prop::collection::btree_set("[a-z]{1,8}", 1..6)) {
        use fieldpath_schema::node::{Class, Def, Field, FieldList};

        let fields: FieldList = idents
            .iter()
            .map(|ident| Field::terminal(ident.clone()))
            .collect();
        let registry: Registry =
            [Class::with_fields(Def::new("prop::model", "Subject"), fields)]
                .into_iter()
                .collect();
        let root = registry.lookup("prop::model::Subject").unwrap();
        let builder = TreeBuilder::new(&registry, &ConstantFormatter);

        let a = builder.build(root).unwrap();
        let b = builder.build(root).unwrap();

        prop_assert_eq!(a, b);
    }
}
