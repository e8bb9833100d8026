use reflectgen::reflect;

#[reflect]
pub struct Person {
    pub name: String,
    pub age: i32,
    nickname: Option<String>,
}

impl Person {
    #[must_use]
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
            nickname: None,
        }
    }

    #[must_use]
    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }
}

#[reflect]
pub struct Empty {}

#[reflect]
pub struct Grid {
    pub cells: [[u8; 4]; 4],
    pub labels: Vec<String>,
}

#[reflect]
pub(crate) struct Hidden {
    pub flag: bool,
}

include!(concat!(env!("OUT_DIR"), "/gen_tests.models.Person.rs"));
include!(concat!(env!("OUT_DIR"), "/gen_tests.models.Empty.rs"));
include!(concat!(env!("OUT_DIR"), "/gen_tests.models.Grid.rs"));
include!(concat!(env!("OUT_DIR"), "/gen_tests.models.Hidden.rs"));
