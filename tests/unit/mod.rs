use dbstructs::{ColumnSchema, Nullable};

pub mod generate_tests;

pub fn col(table: &str, name: &str, data_type: &str, nullable: Nullable) -> ColumnSchema {
    ColumnSchema::new(table, name, data_type, nullable)
}

/// `users(id int NOT NULL, name varchar NULL)` followed by `orders(id int NOT NULL)`
pub fn users_and_orders() -> Vec<ColumnSchema> {
    vec![
        col("users", "id", "int", Nullable::No),
        col("users", "name", "varchar", Nullable::Yes),
        col("orders", "id", "int", Nullable::No),
    ]
}
