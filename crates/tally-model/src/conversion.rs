/// One successfully converted input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRecord {
    /// 1-based physical line number in the source file.
    pub line_number: usize,
    pub value: i64,
    pub binary: String,
    pub hexadecimal: String,
}
