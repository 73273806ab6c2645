#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub email: String,
    pub password: String,
    pub name: String,
    pub height: f64,
    pub target_weight: f64,
    pub goal: String,
    pub age: i32,
    pub gender: String,
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    pub name: Option<String>,
    pub height: Option<f64>,
    pub target_weight: Option<f64>,
    pub goal: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
}
