mod cursor;
mod errors;
mod paginate;
pub use self::cursor::{CursorError, CursorState};
pub use self::errors::PaginationError;
pub use self::paginate::{Edge, MessageConnection, PageArgs, Paginator, DEFAULT_PAGE_SIZE};
