use std::fmt;

/// Greeting composed from one console exchange.
#[derive(Debug, PartialEq, Eq)]
pub struct Greeting {
    name: String,
    age: i32,
}

impl Greeting {
    pub fn new(name: String, age: i32) -> Greeting {
        Greeting { name, age }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hello, {}! You are {} years old.", self.name, self.age)
    }
}
