use gen_tests::models::{Empty, Grid, Person};
use reflectgen::property_type;

#[test]
fn mapping_covers_public_properties_in_declaration_order() {
    assert_eq!(
        Person::PROPERTY_TYPES,
        &[("name", "String"), ("age", "i32")][..]
    );
}

#[test]
fn accessor_returns_live_values() {
    let person = Person::new("ada", 36);

    let name = person.get_value("name").unwrap();
    assert_eq!(name.downcast_ref::<String>(), Some(&"ada".to_string()));

    let age = person.get_value("age").unwrap();
    assert_eq!(age.downcast_ref::<i32>(), Some(&36));
}

#[test]
fn accessor_tracks_instance_state() {
    let young = Person::new("ada", 9);
    let old = Person::new("ada", 90);

    let young_age = young.get_value("age").unwrap().downcast_ref::<i32>();
    let old_age = old.get_value("age").unwrap().downcast_ref::<i32>();
    assert_eq!(young_age, Some(&9));
    assert_eq!(old_age, Some(&90));
}

#[test]
fn unknown_names_fail_with_the_offending_name() {
    let person = Person::new("ada", 36);

    let err = person.get_value("email").err().unwrap();
    assert_eq!(err.name(), "email");
    assert_eq!(err.to_string(), "unknown property 'email'");
}

#[test]
fn private_properties_are_not_mapped() {
    assert!(property_type(Person::PROPERTY_TYPES, "nickname").is_none());
    assert_eq!(property_type(Person::PROPERTY_TYPES, "age"), Some("i32"));

    let person = Person::new("ada", 36);
    assert!(person.get_value("nickname").is_err());
}

#[test]
fn zero_property_types_fail_for_every_name() {
    let empty = Empty {};

    assert!(Empty::PROPERTY_TYPES.is_empty());
    assert!(empty.get_value("anything").is_err());
    assert!(empty.get_value("").is_err());
}

#[test]
fn array_properties_render_with_one_suffix_per_dimension() {
    assert_eq!(
        Grid::PROPERTY_TYPES,
        &[("cells", "u8[][]"), ("labels", "Vec<String>")][..]
    );

    let grid = Grid {
        cells: [[7; 4]; 4],
        labels: vec!["row".to_string()],
    };
    let cells = grid.get_value("cells").unwrap();
    assert_eq!(cells.downcast_ref::<[[u8; 4]; 4]>(), Some(&[[7; 4]; 4]));
}
