//! CPF 檢查碼驗證。
//!
//! 純函式：無 I/O、無共享狀態、不記錄日誌。任何輸入都只會得到 `true` 或 `false`。

/// CPF 的數字位數（含兩位檢查碼）
pub const CPF_LENGTH: usize = 11;

const FIRST_CHECK_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_CHECK_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// 候選字串中依序抽出的 ASCII 十進位數字（每個元素為 0..=9）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDigits(Vec<u8>);

impl NormalizedDigits {
    /// 移除所有非 `0`-`9` 的字元，保留原順序。
    pub fn from_candidate(candidate: &str) -> Self {
        Self(
            candidate
                .bytes()
                .filter(u8::is_ascii_digit)
                .map(|b| b - b'0')
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 所有數字都相同，例如 `00000000000`。空序列不算。
    pub fn is_uniform(&self) -> bool {
        match self.0.split_first() {
            Some((first, rest)) => rest.iter().all(|d| d == first),
            None => false,
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

/// 以權重計算一位檢查碼：`sum mod 11` 小於 2 時為 0，否則為 `11 - 餘數`。
///
/// `digits` 與 `weights` 依位置配對；結果一定落在 0..=9。
pub fn check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&digit, &weight)| u32::from(digit) * weight)
        .sum();

    match sum % 11 {
        remainder if remainder < 2 => 0,
        remainder => (11 - remainder) as u8,
    }
}

/// 驗證 CPF 是否有效。
///
/// 標點與空白會被忽略，因此 `"529.982.247-25"` 與 `"52998224725"` 結果相同。
/// 長度不是 11 位、或 11 位數字完全相同，都直接視為無效。
pub fn is_valid(candidate: &str) -> bool {
    let digits = NormalizedDigits::from_candidate(candidate);

    if digits.len() != CPF_LENGTH || digits.is_uniform() {
        return false;
    }

    let digits = digits.as_slice();

    let first = check_digit(&digits[..9], &FIRST_CHECK_WEIGHTS);

    let mut with_first = [0u8; 10];
    with_first[..9].copy_from_slice(&digits[..9]);
    with_first[9] = first;
    let second = check_digit(&with_first, &SECOND_CHECK_WEIGHTS);

    digits[9..] == [first, second]
}
