//! Element and position index checks
//!
//! An element index addresses an existing item, so its valid range excludes
//! the size; a position index addresses a gap between or around items (an
//! insertion point), so its valid range includes the size. Indices and sizes
//! are signed: the message format distinguishes a negative index from a
//! negative size, and both must stay representable.
//!
//! Message selection is fixed and ordered. A negative index wins over a
//! negative size, and a negative size is reported as `InvalidArgument`
//! rather than `IndexOutOfBounds` since the container, not the index, is
//! what the caller got wrong.

use alloc::format;

use crate::error::{PreconditionError, Result};

/// Ensure `index` addresses an existing element of a container of `size`
///
/// Valid range is `0 <= index < size`; returns `index` on success.
pub fn check_element_index(index: isize, size: isize, desc: &str) -> Result<isize> {
    if index < 0 || index >= size {
        return Err(bad_element_index(index, size, desc));
    }
    Ok(index)
}

/// Ensure `index` addresses a position in a container of `size`
///
/// Valid range is `0 <= index <= size` (the size itself is a valid
/// insertion point); returns `index` on success.
pub fn check_position_index(index: isize, size: isize, desc: &str) -> Result<isize> {
    if index < 0 || index > size {
        return Err(bad_position_index(index, size, desc));
    }
    Ok(index)
}

/// Ensure `start..end` is a valid position range in a container of `size`
///
/// Valid when `0 <= start <= end <= size`.
pub fn check_position_indexes(start: isize, end: isize, size: isize) -> Result<()> {
    if start < 0 || end < start || end > size {
        return Err(bad_position_indexes(start, end, size));
    }
    Ok(())
}

fn bad_element_index(index: isize, size: isize, desc: &str) -> PreconditionError {
    if index < 0 {
        PreconditionError::IndexOutOfBounds(format!("{desc} ({index}) must not be negative"))
    } else if size < 0 {
        PreconditionError::InvalidArgument(format!("negative size: {size}"))
    } else {
        // index >= size
        PreconditionError::IndexOutOfBounds(format!(
            "{desc} ({index}) must be less than size ({size})"
        ))
    }
}

fn bad_position_index(index: isize, size: isize, desc: &str) -> PreconditionError {
    if index < 0 {
        PreconditionError::IndexOutOfBounds(format!("{desc} ({index}) must not be negative"))
    } else if size < 0 {
        PreconditionError::InvalidArgument(format!("negative size: {size}"))
    } else {
        // index > size
        PreconditionError::IndexOutOfBounds(format!(
            "{desc} ({index}) must not be greater than size ({size})"
        ))
    }
}

fn bad_position_indexes(start: isize, end: isize, size: isize) -> PreconditionError {
    if start < 0 || start > size {
        return bad_position_index(start, size, "start index");
    }
    if end < 0 || end > size {
        return bad_position_index(end, size, "end index");
    }
    // Both endpoints are in range, so the order is what is wrong
    PreconditionError::IndexOutOfBounds(format!(
        "end index ({end}) must not be less than start index ({start})"
    ))
}
