pub mod branch;
pub mod cubic;
pub mod quadratic;
pub mod roots;
