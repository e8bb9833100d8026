use reflectgen_macros::reflect;

#[reflect]
pub struct Person {
    pub name: String,
    pub age: i32,
}

fn main() {
    let person = Person {
        name: "ada".to_string(),
        age: 36,
    };
    assert_eq!(person.name.len(), 3);
    assert_eq!(person.age, 36);
}
