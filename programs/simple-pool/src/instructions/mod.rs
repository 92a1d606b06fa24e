// Instructions Module
//
// Exports all instruction handlers for the pool program

pub mod create_pool;
pub mod deposit_liquidity;
pub mod withdraw_liquidity;
pub mod simple_swap_exact_in;
pub mod collect_treasury;

pub use create_pool::*;
pub use deposit_liquidity::*;
pub use withdraw_liquidity::*;
pub use simple_swap_exact_in::*;
pub use collect_treasury::*;
