//! CLI 通用输出格式化模块
//!
//! 提供 table/json/yaml 三种输出格式的通用实现

use anyhow::Result;
use serde::Serialize;

/// 可输出为表格行的数据 trait
pub trait TableRow {
    /// 返回表格列标题
    fn headers() -> Vec<&'static str>;

    /// 返回该项的表格行数据
    fn row(&self) -> Vec<String>;
}

/// 表格格式输出
pub fn print_table<T: TableRow>(items: &[T]) {
    let headers = T::headers();

    // 打印表头
    let header_line: String = headers
        .iter()
        .map(|h| format!("{:<24}", h))
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}", header_line.trim_end());
    println!("{}", "-".repeat(header_line.trim_end().len()));

    // 打印数据行
    for item in items {
        let row_line: String = item
            .row()
            .iter()
            .map(|c| format!("{:<24}", c))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{}", row_line.trim_end());
    }
}

/// JSON 格式输出
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// YAML 格式输出
pub fn print_yaml<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    print!("{}", serde_yaml::to_string(value)?);
    Ok(())
}

/// 根据格式参数选择输出方式
pub fn output_formatted<T: TableRow + Serialize>(items: &[T], format: &str) -> Result<()> {
    match format {
        "table" => print_table(items),
        "yaml" => print_yaml(items)?,
        _ => print_json(items)?,
    }
    Ok(())
}

/// 可选字段的表格显示
pub fn cell(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}
