// src/core/mod.rs
//
// Общие типы: вид на пиксели и плоская запись результата.

pub mod types;
pub mod view;
