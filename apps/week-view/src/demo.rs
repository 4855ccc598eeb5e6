//! Built-in schedule used when no `--schedule` file is given.
//!
//! Classes are open-ended so every week shows something.  The events fall
//! in the week of 2026-10-12; one of them has its bounds swapped to show how
//! refused items are reported.

pub const DEMO_SCHEDULE_CSV: &str = "\
kind,id,title,room,weekday,date,start,end,active_from,active_until\n\
class,1,Ceramics,1,mon,,09:00,11:00,2026-01-05,\n\
class,2,Choir,2,mon,,10:00,12:00,2026-01-05,\n\
class,3,Guitar,3,mon,,11:00,12:30,2026-01-05,\n\
class,4,Painting,1,tue,,17:00,19:00,2026-01-05,\n\
class,5,Tango,2,wed,,18:00,20:00,2026-01-05,\n\
class,6,Chess club,4,wed,,18:30,21:00,2026-01-05,\n\
class,7,Theatre,2,thu,,16:00,18:00,2026-01-05,\n\
class,8,Yoga,3,sat,,09:00,10:00,2026-01-05,\n\
class,9,Board games,4,sat,,10:00,13:00,2026-01-05,\n\
event,100,Open day,1,,2026-10-15,10:00,16:00,,\n\
event,101,Poetry reading,3,,2026-10-15,15:00,17:30,,\n\
event,102,Film night,4,,2026-10-16,19:00,22:00,,\n\
event,103,Mislabelled booking,2,,2026-10-16,14:00,12:00,,\n\
";
