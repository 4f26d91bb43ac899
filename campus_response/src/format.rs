//! Record-to-text formatting helpers.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use campus_data::{Canteen, DepartmentRecord, Hostel, Library, Medical, Sports, Transport};

/// Uppercase the first character: "monday" -> "Monday".
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

/// "hostel_office" -> "Hostel Office".
#[must_use]
pub fn title_case(key: &str) -> String {
    key.split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn department_profile(code: &str, record: &DepartmentRecord) -> String {
    let mut out = format!("{} ({code})\n", record.full_name);
    let _ = writeln!(out, "  HOD: {} ({})", record.hod, record.hod_contact);
    let _ = writeln!(out, "  Office: {}, phone {}", record.office, record.phone);
    let _ = writeln!(
        out,
        "  Established {}, {} faculty, {} students",
        record.established, record.total_faculty, record.total_students
    );
    if !record.labs.is_empty() {
        let _ = writeln!(out, "  Labs: {}", record.labs.join(", "));
    }
    let placements = &record.placements;
    if !placements.average_package.is_empty() {
        let _ = writeln!(
            out,
            "  Placements: average {}, highest {}, rate {}",
            placements.average_package, placements.highest_package, placements.placement_rate
        );
    }
    out.trim_end().to_string()
}

#[must_use]
pub fn library(lib: &Library) -> String {
    let mut out = format!("{}\n", lib.name);
    let _ = writeln!(out, "  Location: {}", lib.location);
    let _ = writeln!(out, "  Timings: {}", lib.timings);
    let _ = writeln!(out, "  Books: {}", lib.total_books);
    let _ = writeln!(out, "  Digital resources: {}", lib.digital_resources);
    let _ = writeln!(out, "  Contact: {}", lib.contact);
    if !lib.services.is_empty() {
        let _ = writeln!(out, "  Services: {}", lib.services.join(", "));
    }
    out.trim_end().to_string()
}

#[must_use]
pub fn canteens(canteens: &BTreeMap<String, Canteen>) -> String {
    let mut out = String::from("Campus canteens:\n");
    for (name, canteen) in canteens {
        let _ = writeln!(
            out,
            "  {}: {} ({})",
            title_case(name),
            canteen.location,
            canteen.timings
        );
    }
    out.trim_end().to_string()
}

#[must_use]
pub fn hostel(hostel: &Hostel) -> String {
    let mut out = String::from("Hostel information:\n");
    let _ = writeln!(
        out,
        "  Boys hostel: blocks {}, warden {} ({})",
        hostel.boys_hostel.blocks.join(", "),
        hostel.boys_hostel.warden,
        hostel.boys_hostel.contact
    );
    let _ = writeln!(
        out,
        "  Girls hostel: blocks {}, warden {} ({})",
        hostel.girls_hostel.blocks.join(", "),
        hostel.girls_hostel.warden,
        hostel.girls_hostel.contact
    );
    if !hostel.mess_timing.is_empty() {
        let _ = writeln!(out, "  Mess timings:");
        for (meal, time) in &hostel.mess_timing {
            let _ = writeln!(out, "    {}: {time}", capitalize(meal));
        }
    }
    out.trim_end().to_string()
}

#[must_use]
pub fn sports(sports: &Sports) -> String {
    let mut out = String::from("Sports facilities:\n");
    let _ = writeln!(out, "  Indoor: {}", sports.indoor.join(", "));
    let _ = writeln!(out, "  Outdoor: {}", sports.outdoor.join(", "));
    let _ = writeln!(out, "  Sports complex: {}", sports.sports_complex_timing);
    let _ = writeln!(out, "  Gym: {}", sports.gym_timing);
    let _ = writeln!(
        out,
        "  Sports officer: {} ({})",
        sports.sports_officer, sports.contact
    );
    out.trim_end().to_string()
}

#[must_use]
pub fn medical(medical: &Medical) -> String {
    let mut out = String::from("Health center:\n");
    let _ = writeln!(out, "  Location: {}", medical.health_center);
    let _ = writeln!(out, "  Timings: {}", medical.timings);
    let _ = writeln!(out, "  Doctor: {}", medical.doctor);
    let _ = writeln!(out, "  Contact: {}", medical.contact);
    let _ = writeln!(out, "  Ambulance: {}", medical.ambulance);
    if !medical.services.is_empty() {
        let _ = writeln!(out, "  Services: {}", medical.services.join(", "));
    }
    out.trim_end().to_string()
}

#[must_use]
pub fn transport(transport: &Transport) -> String {
    let mut out = String::from("Transport:\n");
    let _ = writeln!(out, "  Routes: {}", transport.bus_routes);
    let _ = writeln!(out, "  Buses: {}", transport.total_buses);
    let _ = writeln!(out, "  Timing: {}", transport.timing);
    let _ = writeln!(
        out,
        "  Transport officer: {} ({})",
        transport.transport_officer, transport.contact
    );
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_handles_empty_and_words() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("monday"), "Monday");
    }

    #[test]
    fn title_case_splits_underscores() {
        assert_eq!(title_case("main_canteen"), "Main Canteen");
        assert_eq!(title_case("security"), "Security");
    }
}
