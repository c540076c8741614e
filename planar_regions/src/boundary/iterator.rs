use super::{Boundary, Segment, WindingRule};
use crate::core::traits::Real;
use crate::errors::Error;
use crate::transform::AffineTransform;

/// Forward-only, single-pass cursor over a boundary's segments.
///
/// The cursor face is [SegmentIter::is_done], [SegmentIter::current_segment], and
/// [SegmentIter::advance]; [Iterator] is also implemented and simply drives the cursor.
/// Once exhausted the cursor stays exhausted: every further
/// [current_segment](SegmentIter::current_segment) call returns
/// [Error::IteratorExhausted].
#[derive(Debug, Clone)]
pub struct SegmentIter<'a, T = f64> {
    segments: &'a [Segment<T>],
    winding_rule: WindingRule,
    transform: Option<AffineTransform<T>>,
    pos: usize,
}

impl<'a, T> SegmentIter<'a, T>
where
    T: Real,
{
    pub fn new(boundary: &'a Boundary<T>) -> Self {
        Self {
            segments: boundary.segments(),
            winding_rule: boundary.winding_rule(),
            transform: None,
            pos: 0,
        }
    }

    /// Cursor yielding each segment mapped through `transform`.
    pub fn transformed(boundary: &'a Boundary<T>, transform: AffineTransform<T>) -> Self {
        Self {
            segments: boundary.segments(),
            winding_rule: boundary.winding_rule(),
            transform: Some(transform),
            pos: 0,
        }
    }

    #[inline]
    pub fn winding_rule(&self) -> WindingRule {
        self.winding_rule
    }

    /// True once the cursor has moved past the final segment.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.pos >= self.segments.len()
    }

    /// Segment under the cursor, or [Error::IteratorExhausted] when [is_done](Self::is_done).
    pub fn current_segment(&self) -> Result<Segment<T>, Error> {
        let seg = self
            .segments
            .get(self.pos)
            .copied()
            .ok_or(Error::IteratorExhausted)?;
        Ok(match self.transform {
            Some(ref t) => seg.transformed(t),
            None => seg,
        })
    }

    /// Move the cursor to the next segment. Advancing past the end is a no-op.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.segments.len() {
            self.pos += 1;
        }
    }
}

impl<T> Iterator for SegmentIter<'_, T>
where
    T: Real,
{
    type Item = Segment<T>;

    fn next(&mut self) -> Option<Segment<T>> {
        let seg = self.current_segment().ok()?;
        self.advance();
        Some(seg)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.segments.len() - self.pos;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn exhausted_cursor_fails_on_every_call() {
        let mut b = Boundary::new(WindingRule::NonZero);
        b.move_to(vec2(0.0, 0.0));
        b.line_to(vec2(1.0, 0.0)).unwrap();

        let mut iter = b.iter();
        assert!(!iter.is_done());
        iter.advance();
        iter.advance();
        assert!(iter.is_done());
        assert_eq!(iter.current_segment().unwrap_err(), Error::IteratorExhausted);
        iter.advance();
        assert_eq!(iter.current_segment().unwrap_err(), Error::IteratorExhausted);
    }

    #[test]
    fn transformed_cursor_maps_points() {
        let mut b = Boundary::new(WindingRule::NonZero);
        b.move_to(vec2(1.0, 2.0));
        let t = AffineTransform::translation(10.0, 20.0);
        let first = b.iter_transformed(t).next().unwrap();
        match first {
            Segment::MoveTo(p) => assert_fuzzy_eq!(p, vec2(11.0, 22.0)),
            _ => panic!("expected MoveTo"),
        }
    }
}
