use courseflow::{assign_courses, Instructor};

fn main() {
    env_logger::init();

    let instructors = vec![
        Instructor {
            last_name: "Nakamura".to_string(),
            max_courses: 2,
            preferences: vec![
                "Algorithms".to_string(),
                "Compilers".to_string(),
                "Databases".to_string(),
            ],
        },
        Instructor {
            last_name: "Okafor".to_string(),
            max_courses: 1,
            preferences: vec!["Algorithms".to_string(), "Networks".to_string()],
        },
        Instructor {
            last_name: "Petrov".to_string(),
            max_courses: 1,
            preferences: vec!["Databases".to_string()],
        },
    ];
    let courses = vec![
        "Algorithms".to_string(),
        "Compilers".to_string(),
        "Databases".to_string(),
        "Networks".to_string(),
    ];

    match assign_courses(&instructors, &courses) {
        Ok(assignments) => {
            for assignment in assignments {
                if assignment.courses.is_empty() {
                    println!("{}: (no courses)", assignment.instructor);
                } else {
                    println!("{}: {}", assignment.instructor, assignment.courses.join(", "));
                }
            }
        }
        Err(err) => {
            eprintln!("cannot compute an assignment: {err}");
            std::process::exit(1);
        }
    }
}
