use std::ptr::{null_mut, slice_from_raw_parts_mut};

/// Moves `item` to the heap and returns the raw pointer.
///
/// The result is meant to be bound to an [`AutoFree`][crate::AutoFree] or
/// released with [`free`].
pub fn alloc<T>(item: T) -> *mut T {
    Box::into_raw(Box::new(item))
}

/// Moves `items` to the heap as one contiguous block and returns the raw
/// slice pointer.
///
/// The pointer metadata carries the element count, which [`free_array`] uses
/// to release the whole block.
pub fn alloc_array<T>(items: Vec<T>) -> *mut [T] {
    Box::into_raw(items.into_boxed_slice())
}

/// The null sentinel for array slots: null data address, length 0.
///
/// Raw slice pointers have no null literal, so slots start from (and are
/// reset to) this value.
pub fn null_array<T>() -> *mut [T] {
    slice_from_raw_parts_mut(null_mut(), 0)
}

/// Frees the object addressed by `slot` and writes null back into the slot.
/// A null slot is a no-op.
///
/// # Safety
/// A non-null `slot` must address a live allocation created by [`alloc`] (or
/// `Box::into_raw`), not freed since.
pub unsafe fn free<T>(slot: &mut *mut T) {
    if !slot.is_null() {
        drop(Box::from_raw(*slot));
        *slot = null_mut();
    }
}

/// Frees the whole block addressed by `slot` and writes [`null_array`] back
/// into the slot. A null slot is a no-op.
///
/// # Safety
/// A non-null `slot` must address a live block created by [`alloc_array`] (or
/// a boxed slice via `Box::into_raw`), not freed since.
pub unsafe fn free_array<T>(slot: &mut *mut [T]) {
    if !slot.is_null() {
        drop(Box::from_raw(*slot));
        *slot = null_array::<T>();
    }
}
