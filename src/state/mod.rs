// ============================================================================
// STATE MODULE - Stores con Rc<RefCell> + notificaciones
// ============================================================================

pub mod app_state;
pub mod cart_state;
pub mod catalog_state;
pub mod session_state;

pub use app_state::*;
pub use cart_state::*;
pub use catalog_state::*;
pub use session_state::*;
