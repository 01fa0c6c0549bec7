//! Fixed request payloads used by the case sequence

/// Sample resume submitted to `/resume/analyze-text`
pub const SAMPLE_RESUME_TEXT: &str = "\
John Doe
Software Engineer
john.doe@example.com | (555) 123-4567 | San Francisco, CA

SUMMARY
Experienced software engineer with 5+ years of experience in full-stack development,
specializing in React, Node.js, and cloud technologies. Passionate about creating
scalable and maintainable code.

SKILLS
Programming: JavaScript, TypeScript, Python, Java
Frontend: React, Redux, HTML5, CSS3, Tailwind CSS
Backend: Node.js, Express, Django, Spring Boot
Databases: MongoDB, PostgreSQL, MySQL
DevOps: Docker, Kubernetes, AWS, CI/CD

EXPERIENCE
Senior Software Engineer | TechCorp Inc. | Jan 2020 - Present
- Led development of a microservices-based e-commerce platform using Node.js and React
- Implemented CI/CD pipelines reducing deployment time by 40%
- Mentored junior developers and conducted code reviews

Software Engineer | WebSolutions LLC | Mar 2018 - Dec 2019
- Developed RESTful APIs using Express.js and MongoDB
- Built responsive web applications with React and Redux
- Optimized database queries improving application performance by 30%

EDUCATION
Bachelor of Science in Computer Science
University of California, Berkeley | 2014-2018
";

/// Sample job description submitted to `/job/match`
pub const SAMPLE_JOB_DESCRIPTION: &str = "\
Senior Full Stack Developer

About the Role:
We're looking for an experienced Full Stack Developer to join our growing team.
The ideal candidate will have strong experience with React, Node.js, and cloud technologies.

Requirements:
- 5+ years of experience in software development
- Strong proficiency in JavaScript/TypeScript
- Experience with React, Redux, and modern frontend frameworks
- Backend experience with Node.js and Express
- Database knowledge (MongoDB, PostgreSQL)
- Experience with cloud platforms (AWS, Azure, or GCP)
- Excellent problem-solving and communication skills

Responsibilities:
- Develop and maintain web applications using React and Node.js
- Write clean, maintainable, and efficient code
- Collaborate with cross-functional teams
- Participate in code reviews and mentor junior developers
- Implement best practices for security and performance

Benefits:
- Competitive salary
- Remote work options
- Health insurance
- 401(k) matching
- Professional development budget
";
