//! Builders for ad-export and tag files in CSV and XLSX form.
//!
//! Tag files mimic the real export layout: ten preamble rows, header on row 11.

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use tagsync_core::InputFile;

pub const AD_HEADER: &[&str] = &["Campaign Name", "Ad Group Name", "Ad Name", "Web URL", "Status"];
pub const TAG_HEADER: &[&str] = &[
    "Campaign Name",
    "Placement Name",
    "Ad Name",
    "Placement ID",
    "Click Tag",
    "Impression Tag (image)",
];

pub fn ad_rows() -> Vec<Vec<&'static str>> {
    vec![
        vec!["Spring", "Teens", "Video A", "https://shop.example/spring", "Active"],
        vec!["Spring", "Adults", "Video B", "https://shop.example/spring?ref=tt", "Active"],
        vec!["Summer", "Teens", "Video C", "", "Paused"],
    ]
}

pub fn tag_rows() -> Vec<Vec<&'static str>> {
    vec![
        vec![
            "Spring",
            "Teens",
            "Video A",
            "101",
            "https://ad.doubleclick.example/ddm/trackclk/N1;1;2?",
            r#"<IMG SRC="https://ad.doubleclick.example/ddm/trackimp/N1;1;2;?ord=[timestamp]" BORDER="0" HEIGHT="1" WIDTH="1">"#,
        ],
        vec![
            "Summer",
            "Teens",
            "Video C",
            "102",
            "https://ad.doubleclick.example/ddm/trackclk/N1;3;4?",
            r#"<IMG SRC="https://ad.doubleclick.example/ddm/trackimp/N1;3;4;?ord=[timestamp]">"#,
        ],
    ]
}

fn csv_text(preamble: usize, header: &[&str], rows: &[Vec<&str>]) -> String {
    let mut out = String::new();
    for i in 0..preamble {
        out.push_str(&format!("Report line {i},,\n"));
    }
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(header).unwrap();
    for row in rows {
        writer.write_record(row).unwrap();
    }
    out.push_str(&String::from_utf8(writer.into_inner().unwrap()).unwrap());
    out
}

pub fn ads_csv(rows: &[Vec<&str>]) -> InputFile {
    InputFile::new("ExportAds_Test.csv", csv_text(0, AD_HEADER, rows))
}

pub fn tags_csv_with(header: &[&str], rows: &[Vec<&str>]) -> InputFile {
    InputFile::new("Tags_Test.csv", csv_text(10, header, rows))
}

pub fn tags_csv(rows: &[Vec<&str>]) -> InputFile {
    tags_csv_with(TAG_HEADER, rows)
}

fn workbook(sheet: &str, first_row: u32, header: &[&str], rows: &[Vec<&str>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    // A leading sheet makes sure lookup is by name, not position.
    workbook.add_worksheet().set_name("Summary").unwrap();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet).unwrap();
    if first_row > 0 {
        worksheet.write_string(0, 0, "Campaign report").unwrap();
    }
    for (c, name) in header.iter().enumerate() {
        worksheet.write_string(first_row, c as u16, *name).unwrap();
    }
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            if !value.is_empty() {
                worksheet
                    .write_string(first_row + 1 + r as u32, c as u16, *value)
                    .unwrap();
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}

pub fn ads_xlsx(rows: &[Vec<&str>]) -> Vec<u8> {
    workbook("Ads", 0, AD_HEADER, rows)
}

pub fn tags_xlsx(rows: &[Vec<&str>]) -> Vec<u8> {
    workbook("Tracking Ads", 10, TAG_HEADER, rows)
}
