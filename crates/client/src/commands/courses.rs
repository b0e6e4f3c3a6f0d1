//! Course catalogue commands.

use common::ClientResult;
use domain::{Course, CourseFilters, PageRequest};

use super::App;
use crate::cli::args::CoursesArgs;

pub async fn list(app: &App, args: CoursesArgs) -> ClientResult<()> {
    let courses = &app.services.courses;

    let listed = if args.featured {
        courses.featured_courses().await.into_result()?
    } else if let Some(query) = args.search.as_deref() {
        courses.search_courses(query).await.into_result()?
    } else {
        let filters = CourseFilters {
            difficulty: args.difficulty,
            max_price: args.max_price,
            ..CourseFilters::default()
        };
        let page = courses
            .courses(&filters, Some(PageRequest::new(args.page, args.limit)))
            .await
            .into_result()?;
        println!("Page {} of {} ({} courses)", page.page, page.total_pages.max(1), page.total);
        page.data
    };

    if listed.is_empty() {
        println!("No courses found");
    }
    for course in &listed {
        print_summary(course);
    }
    Ok(())
}

pub async fn show(app: &App, id: &str) -> ClientResult<()> {
    let course = app.services.courses.course(id).await.into_result()?;

    print_summary(&course);
    if !course.description.is_empty() {
        println!("{}", course.description);
    }
    if !course.address.is_empty() {
        println!("Address:   {}", course.address);
    }
    if !course.amenities.is_empty() {
        println!("Amenities: {}", course.amenities.join(", "));
    }
    for hole in &course.hole_details {
        println!("  Hole {:>2}  par {}  {} yds", hole.hole_number, hole.par, hole.length);
    }
    Ok(())
}

pub async fn conditions(app: &App, course_id: Option<&str>) -> ClientResult<()> {
    let courses = &app.services.courses;

    match course_id {
        Some(id) => {
            let c = courses.course_conditions(id).await.into_result()?;
            println!("Green speed: {:.1}", c.green_speed);
            println!("Fairways:    {}", c.fairway_condition);
            println!("Rough:       {}", c.rough_condition);
            println!("Bunkers:     {}", c.bunker_condition);
            println!(
                "Weather:     {}, {:.0}°, wind {:.0}, humidity {:.0}%",
                c.weather_condition, c.temperature, c.wind_speed, c.humidity
            );
        }
        None => {
            let greens = courses.green_conditions().await.into_result()?;
            if greens.is_empty() {
                println!("No green conditions reported");
            }
            for green in &greens {
                let hole = green
                    .hole_number
                    .map(|h| format!("hole {}", h))
                    .unwrap_or_else(|| "all holes".to_string());
                println!(
                    "Course {} {}: {} (speed {:.1})",
                    green.course_id, hole, green.condition, green.green_speed
                );
            }
        }
    }
    Ok(())
}

fn print_summary(course: &Course) {
    println!(
        "[{}] {} - {} holes, par {}, {}",
        course.id, course.name, course.holes, course.par, course.difficulty
    );
}
