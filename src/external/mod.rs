pub mod anthropic;
pub mod talent_pool;

pub use anthropic::AnthropicClient;
pub use talent_pool::TalentPoolClient;
