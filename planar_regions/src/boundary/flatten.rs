use std::collections::VecDeque;

use super::{Segment, SegmentIter, WindingRule};
use crate::core::math::Vector2;
use crate::core::traits::Real;
use crate::curve::{CubicBezier, QuadraticBezier};
use crate::errors::Error;

/// Flattening adapter over a [SegmentIter]: substitutes each curve segment with straight
/// line segments by recursive midpoint subdivision until the curve's flatness drops to the
/// tolerance or the recursion limit is reached.
///
/// `MoveTo`/`Close` structure and the source winding rule pass through unchanged. Shares
/// the cursor contract of [SegmentIter] (exhausted cursors fail every
/// [current_segment](FlattenIter::current_segment) call).
#[derive(Debug, Clone)]
pub struct FlattenIter<'a, T = f64> {
    source: SegmentIter<'a, T>,
    flatness_squared: T,
    recursion_limit: u32,
    pending: VecDeque<Segment<T>>,
    subpath_start: Vector2<T>,
    current: Vector2<T>,
}

impl<'a, T> FlattenIter<'a, T>
where
    T: Real,
{
    /// Wrap `source` with a flatness tolerance and a subdivision recursion limit.
    ///
    /// Fails with [Error::InvalidArgument] if `flatness` is negative. A limit of 0 emits
    /// every curve as its single chord.
    pub fn new(source: SegmentIter<'a, T>, flatness: T, recursion_limit: u32) -> Result<Self, Error> {
        if flatness < T::zero() {
            return Err(Error::InvalidArgument("flatness tolerance must be non-negative"));
        }
        let mut result = Self {
            source,
            flatness_squared: flatness * flatness,
            recursion_limit,
            pending: VecDeque::new(),
            subpath_start: Vector2::zero(),
            current: Vector2::zero(),
        };
        result.refill();
        Ok(result)
    }

    #[inline]
    pub fn winding_rule(&self) -> WindingRule {
        self.source.winding_rule()
    }

    /// True once the cursor has moved past the final segment.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }

    /// Segment under the cursor, or [Error::IteratorExhausted] when [is_done](Self::is_done).
    pub fn current_segment(&self) -> Result<Segment<T>, Error> {
        self.pending.front().copied().ok_or(Error::IteratorExhausted)
    }

    /// Move the cursor to the next segment. Advancing past the end is a no-op.
    pub fn advance(&mut self) {
        self.pending.pop_front();
        self.refill();
    }

    // Pulls source segments until at least one flattened segment is pending (or the
    // source is exhausted). Every source segment yields at least one output segment so a
    // single pull suffices.
    fn refill(&mut self) {
        while self.pending.is_empty() && !self.source.is_done() {
            // is_done was checked so the cursor cannot be exhausted here
            let seg = match self.source.current_segment() {
                Ok(s) => s,
                Err(_) => return,
            };
            self.source.advance();
            match seg {
                Segment::MoveTo(p) => {
                    self.pending.push_back(seg);
                    self.subpath_start = p;
                    self.current = p;
                }
                Segment::LineTo(p) => {
                    self.pending.push_back(seg);
                    self.current = p;
                }
                Segment::Close => {
                    self.pending.push_back(seg);
                    self.current = self.subpath_start;
                }
                Segment::QuadTo(c, p) => {
                    self.flatten_quad(QuadraticBezier::new(self.current, c, p));
                    self.current = p;
                }
                Segment::CubicTo(c1, c2, p) => {
                    self.flatten_cubic(CubicBezier::new(self.current, c1, c2, p));
                    self.current = p;
                }
            }
        }
    }

    fn flatten_quad(&mut self, curve: QuadraticBezier<T>) {
        let mut stack = vec![(curve, 0u32)];
        while let Some((c, level)) = stack.pop() {
            if level >= self.recursion_limit || c.flatness_squared() <= self.flatness_squared {
                self.pending.push_back(Segment::LineTo(c.end));
            } else {
                let (left, right) = c.subdivide();
                stack.push((right, level + 1));
                stack.push((left, level + 1));
            }
        }
    }

    fn flatten_cubic(&mut self, curve: CubicBezier<T>) {
        let mut stack = vec![(curve, 0u32)];
        while let Some((c, level)) = stack.pop() {
            if level >= self.recursion_limit || c.flatness_squared() <= self.flatness_squared {
                self.pending.push_back(Segment::LineTo(c.end));
            } else {
                let (left, right) = c.subdivide();
                stack.push((right, level + 1));
                stack.push((left, level + 1));
            }
        }
    }
}

impl<T> Iterator for FlattenIter<'_, T>
where
    T: Real,
{
    type Item = Segment<T>;

    fn next(&mut self) -> Option<Segment<T>> {
        let seg = self.current_segment().ok()?;
        self.advance();
        Some(seg)
    }
}
