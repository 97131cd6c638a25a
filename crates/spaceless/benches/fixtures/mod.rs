macro_rules! input {
    ($name: literal) => {
        ($name, include_str!(concat!("./", $name)))
    };
}

pub const FIXTURES: [(&str, &str); 2] = [
    input!("todo_list.js"),
    input!("email.js"),
];
