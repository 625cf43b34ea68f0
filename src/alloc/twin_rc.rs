//! `TwinRc` — a reference-counted pointer born with exactly two owners.
//!
//! Each undirected edge stores its payload once and hands one share to each of
//! its two half-edges. Unlike `Rc`, a `TwinRc` cannot be cloned: the only way to
//! obtain a handle is [`TwinRc::pair`], so the share count starts at 2 and never
//! grows. Either half may release its share independently; the payload is
//! destroyed when the second share goes away.

use core::cell::{Cell, UnsafeCell};
use core::fmt;
use core::marker::PhantomData;
use core::ops::Deref;
use core::ptr::NonNull;

/// Heap block shared by both twins.
struct TwinInner<T> {
    shares: Cell<u8>,
    value: UnsafeCell<T>,
}

/// One of the two owning handles to a shared payload.
///
/// The share count is a plain `Cell`, so handles are neither `Send` nor `Sync`
/// (the `NonNull` field already opts out of both).
pub struct TwinRc<T> {
    ptr: NonNull<TwinInner<T>>,
    _owns: PhantomData<TwinInner<T>>,
}

impl<T> TwinRc<T> {
    /// Moves `value` to the heap and returns its two co-owners.
    pub fn pair(value: T) -> (Self, Self) {
        let inner = Box::new(TwinInner {
            shares: Cell::new(2),
            value: UnsafeCell::new(value),
        });
        let ptr = NonNull::from(Box::leak(inner));

        (
            Self {
                ptr,
                _owns: PhantomData,
            },
            Self {
                ptr,
                _owns: PhantomData,
            },
        )
    }

    #[inline(always)]
    fn inner(&self) -> &TwinInner<T> {
        // SAFETY: the block stays allocated while at least one share is held,
        // and `self` is such a share.
        unsafe { self.ptr.as_ref() }
    }

    /// Returns a shared reference to the payload.
    #[inline]
    pub fn get(&self) -> &T {
        // SAFETY: mutable access is only handed out through `get_mut` (requires
        // the twin to be gone) or `value_mut` (caller upholds exclusivity).
        unsafe { &*self.inner().value.get() }
    }

    /// Number of live owners: 2 while both halves exist, 1 afterwards.
    #[inline]
    pub fn shares(&self) -> usize {
        usize::from(self.inner().shares.get())
    }

    /// Returns `true` if both handles own the same payload.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        this.ptr == other.ptr
    }

    /// Returns a mutable reference if this handle is the sole remaining owner.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.shares() == 1 {
            // SAFETY: no twin exists, and `&mut self` excludes other borrows of this one.
            Some(unsafe { &mut *self.inner().value.get() })
        } else {
            None
        }
    }

    /// Returns a mutable reference to the payload regardless of the twin.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that no other reference to the payload, obtained
    /// through this handle or its twin, is alive for the returned lifetime.
    #[allow(clippy::mut_from_ref)]
    #[inline]
    pub unsafe fn value_mut(&self) -> &mut T {
        &mut *self.inner().value.get()
    }

    /// Gives up this share.
    ///
    /// Returns the payload if this was the last owner, `None` if the twin still
    /// holds it.
    pub fn release(self) -> Option<T> {
        let this = core::mem::ManuallyDrop::new(self);
        let remaining = this.inner().shares.get() - 1;

        if remaining == 0 {
            // SAFETY: last owner; reclaim the allocation made in `pair`.
            let inner = unsafe { Box::from_raw(this.ptr.as_ptr()) };
            Some(inner.value.into_inner())
        } else {
            this.inner().shares.set(remaining);
            None
        }
    }
}

impl<T> Drop for TwinRc<T> {
    fn drop(&mut self) {
        let remaining = self.inner().shares.get() - 1;
        if remaining == 0 {
            // SAFETY: last owner; the box was leaked in `pair` and is freed once.
            unsafe { drop(Box::from_raw(self.ptr.as_ptr())) };
        } else {
            self.inner().shares.set(remaining);
        }
    }
}

impl<T> Deref for TwinRc<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T: fmt::Debug> fmt::Debug for TwinRc<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwinRc")
            .field("shares", &self.shares())
            .field("value", self.get())
            .finish()
    }
}
