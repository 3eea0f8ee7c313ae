/// View parameters encoded in a render's file name,
/// `cv<id>_v<vertical>_h<horizontal>_osc<offset>.png`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewName{
    pub camera_id: i64,
    pub vertical_angle: i64,
    pub horizontal_angle: i64,
    pub oscillation_offset: i64,
}

impl ViewName{
    /// Matches the pattern against the start of `name`; whatever follows
    /// `.png` is ignored.
    pub fn parse(name: &str) -> Option<Self>{
        let mut cur = Cursor{ rest: name };
        cur.literal("cv")?;
        let camera_id = cur.signed()?;
        cur.literal("_v")?;
        let vertical_angle = cur.signed()?;
        cur.literal("_h")?;
        let horizontal_angle = cur.signed()?;
        cur.literal("_osc")?;
        let oscillation_offset = cur.signed()?;
        cur.literal(".png")?;
        Some(Self{ camera_id, vertical_angle, horizontal_angle, oscillation_offset })
    }
}

struct Cursor<'a>{
    rest: &'a str,
}

impl<'a> Cursor<'a>{
    fn literal(&mut self, lit: &str) -> Option<()>{
        self.rest = self.rest.strip_prefix(lit)?;
        Some(())
    }

    fn signed(&mut self) -> Option<i64>{
        let sign = usize::from(self.rest.starts_with('-'));
        let digits = self.rest[sign..].bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let (num, rest) = self.rest.split_at(sign + digits);
        self.rest = rest;
        num.parse().ok()
    }
}
