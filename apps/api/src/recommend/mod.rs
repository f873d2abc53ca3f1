// Recommendation feature: prompt construction, the request pipeline,
// server-rendered pages and the HTTP handlers that tie them together.
// All completion calls go through llm_client.

pub mod handlers;
pub mod pages;
pub mod prompts;
pub mod service;
