/*!
 * Command implementations
 */

pub mod map;
pub mod services;
