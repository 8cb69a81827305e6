use word_bitset::{Bitset, Result};

fn combinations(idx: usize, bitset: &mut Bitset, data: &mut [bool]) -> Result<()> {
    if idx == data.len() {
        for (idx, pick) in (0..data.len()).zip(bitset.iter()) {
            data[idx] = pick;
        }
        println!("{bitset} {data:?}");
        return Ok(());
    }
    if !bitset.get(idx)? {
        bitset.set(idx, true)?;
        combinations(idx + 1, bitset, data)?;
        bitset.set(idx, false)?;
    }
    combinations(idx + 1, bitset, data)
}

fn main() -> Result<()> {
    const BIT_COUNT: usize = 5;
    let mut bitset = Bitset::new(BIT_COUNT)?;
    let mut my_data = [false; BIT_COUNT];
    combinations(0, &mut bitset, &mut my_data)
}
